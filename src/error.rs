//! Error types for ticketflow
//!
//! All fallible operations in the crate return [`Result`], which wraps
//! [`TicketFlowError`]. Lifecycle validation failures carry the exact
//! message surfaced to the caller; nothing is logged and suppressed.

use crate::core::{AgentId, TicketId};
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketFlowError>;

/// Errors that can occur in ticketflow operations
#[derive(Debug, Error)]
pub enum TicketFlowError {
    /// An operation referenced a ticket id absent from the store
    #[error("Ticket not found.")]
    TicketNotFound { id: TicketId },

    /// An assignment referenced an agent id absent from the directory
    #[error("Agent not found.")]
    AgentNotFound { id: AgentId },

    /// Create was called without a description
    #[error("Description is required to create a ticket.")]
    MissingDescription,

    /// Close was called while the resolution summary is empty
    #[error("The Resolution summary is required to close a ticket.")]
    MissingResolutionSummary,

    /// A lifecycle operation was attempted from a status that forbids it
    #[error("{reason}")]
    InvalidState { reason: String },

    /// The project data directory does not exist yet
    #[error("Project is not initialized. Run `ticketflow init` first.")]
    ProjectNotInitialized,

    /// The project data directory already exists
    #[error("Project is already initialized at {path}")]
    ProjectAlreadyInitialized { path: String },

    /// Invalid user input (ids, dates, status names)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failed to parse stored data
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for errors without a dedicated variant
    #[error("{0}")]
    Custom(String),
}

impl TicketFlowError {
    /// Create a custom error from any displayable message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Create an invalid-state error carrying the violated rule
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_error_messages() {
        let err = TicketFlowError::TicketNotFound {
            id: TicketId::new(42),
        };
        assert_eq!(err.to_string(), "Ticket not found.");

        assert_eq!(
            TicketFlowError::MissingDescription.to_string(),
            "Description is required to create a ticket."
        );
        assert_eq!(
            TicketFlowError::MissingResolutionSummary.to_string(),
            "The Resolution summary is required to close a ticket."
        );
    }

    #[test]
    fn test_invalid_state_carries_rule() {
        let err = TicketFlowError::invalid_state("Closed tickets cannot be updated");
        assert_eq!(err.to_string(), "Closed tickets cannot be updated");
    }
}
