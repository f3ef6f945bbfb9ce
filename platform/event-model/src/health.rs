//! Liveness-probe payload carried in the `data` sequence of `HEALTH`
//! envelopes

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One component's answer to a liveness probe
///
/// A collaborator receiving an envelope whose action is
/// [`crate::HEALTH_ACTION`] appends its own report and sends the envelope
/// onward without touching business logic, so a single probe traces the
/// whole path from gateway to provider and back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    /// Component reporting in (e.g. "gateway", "provider")
    pub component: String,

    /// Reported condition
    pub status: HealthStatus,

    /// Report time, epoch milliseconds
    pub time: i64,
}

impl Health {
    /// Create a report stamped with the current time
    pub fn new(component: String, status: HealthStatus) -> Self {
        Self {
            component,
            status,
            time: Utc::now().timestamp_millis(),
        }
    }
}

/// Condition reported by a probed component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthStatus {
    /// Component is up and answering
    ApplicationHealthy,

    /// Component is up but failing its own checks
    ApplicationUnhealthy,
}
