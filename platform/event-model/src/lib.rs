//! # Event Model
//!
//! Platform-wide message envelope and status lifecycle for eventually
//! consistent request/response exchanges.
//!
//! ## Why This Lives in Tier 1
//!
//! The envelope is a **shared wire contract** that every bus collaborator
//! depends on. Placing it in `platform/` (Tier 1) allows:
//! - Gateways, caches, and providers to agree on one schema without
//!   depending on each other
//! - The status lifecycle to be interpreted identically on every hop
//! - Transport and storage crates to stay free of exchange semantics
//!
//! ## Exchange Flow
//!
//! A gateway constructs an [`Event`] with status `NEW` and publishes it.
//! A cache or provider receives it, derives a reply carrying the same
//! correlation id and a new status, and publishes the reply back. The
//! gateway matches the reply to the pending request by `corr_id` and
//! releases the original caller.
//!
//! ## Usage
//!
//! ```rust
//! use event_model::{Event, Status};
//!
//! // Gateway: originate a request
//! let request: Event<String> = Event::new(
//!     "org1".to_string(),
//!     "employees".to_string(),
//!     "GET_ALL_EMPLOYEES".to_string(),
//!     "tokenA".to_string(),
//! );
//!
//! // Provider: derive the reply, same correlation id, new status
//! let mut reply: Event<String> = request.respond(Status::Success);
//! reply.add_data("employee record".to_string());
//!
//! assert_eq!(reply.corr_id, request.corr_id);
//! assert!(reply.status.is_terminal());
//! ```

mod envelope;
mod health;
mod status;

pub use envelope::Event;
pub use health::{Health, HealthStatus};
pub use status::{validate_transition, Status, TransitionError};

/// Reserved action name for liveness probes.
///
/// A collaborator receiving an envelope with this action must reply without
/// touching business logic.
pub const HEALTH_ACTION: &str = "HEALTH";

/// Reserved client identity naming the response cache as an envelope's
/// originator, distinguishing cache-originated exchanges from exchanges
/// originated by an API token.
pub const CACHE_CLIENT: &str = "CACHE";

/// Errors that can occur when encoding or decoding envelopes
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("failed to serialize event: {0}")]
    SerializeError(String),

    #[error("failed to deserialize event: {0}")]
    DeserializeError(String),
}

/// Result type for envelope codec operations
pub type EventResult<T> = Result<T, EventError>;
