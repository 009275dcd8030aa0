//! Ticket entity

use super::{Agent, Status, TicketId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trackable unit of support work with a lifecycle status
///
/// Field invariants, maintained by [`crate::service::TicketService`]:
/// `closed_at` is set iff `status == Closed`; `assigned_agent` is set only
/// when the status is `InProgress`, `Resolved` or `Closed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Store-assigned identifier; `None` only before the first save
    pub id: Option<TicketId>,
    /// What the ticket is about; required non-empty at creation
    pub description: String,
    /// Current lifecycle status
    pub status: Status,
    /// When the ticket was created; set once, immutable
    pub created_at: DateTime<Utc>,
    /// When the ticket was closed; set by the close operation
    pub closed_at: Option<DateTime<Utc>>,
    /// The agent working the ticket; set exactly once during assignment
    pub assigned_agent: Option<Agent>,
    /// Free-text justification required before closure
    pub resolution_summary: Option<String>,
}

impl Ticket {
    /// Create a fresh ticket in the `New` status
    ///
    /// The id stays unassigned until the store persists the ticket.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: None,
            description: description.into(),
            status: Status::New,
            created_at: Utc::now(),
            closed_at: None,
            assigned_agent: None,
            resolution_summary: None,
        }
    }

    /// Name of the assigned agent, if any
    #[must_use]
    pub fn assigned_agent_name(&self) -> Option<&str> {
        self.assigned_agent.as_ref().map(|agent| agent.name.as_str())
    }

    /// Whether a non-empty resolution summary is present
    #[must_use]
    pub fn has_resolution_summary(&self) -> bool {
        self.resolution_summary
            .as_deref()
            .is_some_and(|summary| !summary.is_empty())
    }
}
