use super::{Agent, Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Used by tests and fixtures to construct tickets in arbitrary lifecycle
/// states without going through the service operations.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    description: Option<String>,
    status: Option<Status>,
    created_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
    assigned_agent: Option<Agent>,
    resolution_summary: Option<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `closed_at` timestamp
    #[must_use]
    pub const fn closed_at(mut self, closed_at: DateTime<Utc>) -> Self {
        self.closed_at = Some(closed_at);
        self
    }

    /// Set the assigned agent
    #[must_use]
    pub fn assigned_agent(mut self, agent: Agent) -> Self {
        self.assigned_agent = Some(agent);
        self
    }

    /// Set the resolution summary
    #[must_use]
    pub fn resolution_summary(mut self, summary: impl Into<String>) -> Self {
        self.resolution_summary = Some(summary.into());
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id,
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or(Status::New),
            created_at: self.created_at.unwrap_or_else(Utc::now),
            closed_at: self.closed_at,
            assigned_agent: self.assigned_agent,
            resolution_summary: self.resolution_summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentId;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .description("Printer on fire")
            .status(Status::InProgress)
            .assigned_agent(Agent::new(AgentId::new(1), "Agent001"))
            .build();

        assert_eq!(ticket.description, "Printer on fire");
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(ticket.assigned_agent_name(), Some("Agent001"));
        assert!(ticket.id.is_none());
    }

    #[test]
    fn test_builder_defaults_match_fresh_ticket() {
        let ticket = TicketBuilder::new().description("A ticket").build();

        assert_eq!(ticket.status, Status::New);
        assert!(ticket.closed_at.is_none());
        assert!(ticket.assigned_agent.is_none());
        assert!(ticket.resolution_summary.is_none());
    }
}
