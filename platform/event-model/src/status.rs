//! # Status Lifecycle
//!
//! Lifecycle states for one eventually consistent exchange and the
//! forward-only transition contract every collaborator must uphold.
//!
//! The envelope is a passive record, so nothing here is enforced by the
//! entity itself. [`validate_transition`] is meant for the boundary where
//! envelopes are received from the bus: a violation there is a protocol bug
//! in some collaborator, surfaced as a classified error instead of silently
//! corrupting the exchange.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Lifecycle state of an exchange
///
/// A valid exchange only ever moves forward:
///
/// ```text
/// NEW ──> { IN_PROGRESS | ADDED_TO_CACHE } ──> { SUCCESS | ERROR | REJECTED | TIMEOUT }
///  └──────────────────────────────────────────────────^
/// ```
///
/// Terminal states are never left and no state returns to `NEW`. The
/// surrounding system owns the full vocabulary; these are the states every
/// collaborator must understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Initial state, set only at construction by the originator
    #[default]
    New,

    /// A provider has accepted the exchange but not yet completed it
    InProgress,

    /// The response cache has accepted the exchange
    AddedToCache,

    /// Terminal: processing completed, `data` holds the result
    Success,

    /// Terminal: processing failed, `message` should describe the cause
    Error,

    /// Terminal: a collaborator refused the exchange
    Rejected,

    /// Terminal: the gateway abandoned the wait for a reply
    Timeout,
}

impl Status {
    /// True for states that end an exchange
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Status::Success | Status::Error | Status::Rejected | Status::Timeout
        )
    }

    /// True if asserting `next` after `self` moves the exchange forward
    ///
    /// Terminal states are never left and no state returns to
    /// [`Status::New`]. Everything else is forward, including a direct jump
    /// from `New` to a terminal state (a cache answering immediately) and
    /// moves between the two in-flight states.
    pub fn can_transition_to(self, next: Status) -> bool {
        !self.is_terminal() && next != Status::New
    }
}

/// Violations of the forward-only transition contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("exchange already ended as {from:?}, cannot move to {to:?}")]
    TerminalStatus { from: Status, to: Status },

    #[error("exchange cannot return to NEW from {from:?}")]
    RevertedToNew { from: Status },
}

/// Validate one observed status transition at the bus-receive boundary
///
/// Collaborators compare the status they last recorded for a correlation id
/// with the status on the envelope that just arrived.
///
/// # Arguments
/// * `from` - Status previously recorded for the exchange
/// * `to` - Status carried by the envelope just received
///
/// # Returns
/// * `Ok(())` if the move is forward
/// * `Err(TransitionError)` classifying the violation
pub fn validate_transition(from: Status, to: Status) -> Result<(), TransitionError> {
    if from.is_terminal() {
        warn!(from = ?from, to = ?to, "Status moved out of a terminal state");
        return Err(TransitionError::TerminalStatus { from, to });
    }

    if to == Status::New {
        warn!(from = ?from, "Status moved back to NEW");
        return Err(TransitionError::RevertedToNew { from });
    }

    Ok(())
}
