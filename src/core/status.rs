//! Ticket lifecycle status
//!
//! Statuses progress strictly forward: `NEW -> IN_PROGRESS -> RESOLVED ->
//! CLOSED`. There is no regression transition and no skipping of states;
//! the checks enforcing this live in [`crate::service::TicketService`].

use crate::error::TicketFlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a ticket
///
/// The derived ordering follows the progression order, so
/// `Status::New < Status::Closed` holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Just created, not yet assigned to an agent
    New,
    /// Assigned to an agent and being worked on
    InProgress,
    /// Work finished, awaiting closure
    Resolved,
    /// Closed with a resolution summary; terminal
    Closed,
}

impl Status {
    /// Whether this status is the terminal one
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::New => "NEW",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = TicketFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(TicketFlowError::InvalidInput(format!(
                "Invalid status: '{s}'. Expected one of NEW, IN_PROGRESS, RESOLVED, CLOSED"
            ))),
        }
    }
}
