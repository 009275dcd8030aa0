//! Test utilities for ticketflow
//!
//! Common fixtures shared by the storage and filter tests. The seed set
//! mirrors the shape the filter tests rely on: five tickets, exactly one
//! in progress, three created within the last three days, two assigned to
//! "Agent002".

#![cfg(test)]

use crate::core::{Agent, AgentId, Status, Ticket, TicketBuilder};
use crate::storage::{MemoryStorage, TicketStore};
use chrono::{Duration, Utc};

/// Build the five-ticket seed set used by the filter tests
pub fn seed_tickets() -> Vec<Ticket> {
    let now = Utc::now();
    let agent1 = Agent::new(AgentId::new(1), "Agent001");
    let agent2 = Agent::new(AgentId::new(2), "Agent002");

    vec![
        TicketBuilder::new()
            .description("Cannot log in to the VPN")
            .created_at(now - Duration::days(6))
            .build(),
        TicketBuilder::new()
            .description("Mailbox over quota")
            .status(Status::Resolved)
            .created_at(now - Duration::days(4))
            .assigned_agent(agent2.clone())
            .resolution_summary("Archived old mail.")
            .build(),
        TicketBuilder::new()
            .description("Laptop fan noise")
            .status(Status::InProgress)
            .created_at(now - Duration::days(2))
            .assigned_agent(agent2)
            .build(),
        TicketBuilder::new()
            .description("Printer out of toner")
            .created_at(now - Duration::days(1))
            .build(),
        TicketBuilder::new()
            .description("Monitor flickers")
            .status(Status::Closed)
            .created_at(now - Duration::hours(1))
            .closed_at(now)
            .assigned_agent(agent1)
            .resolution_summary("Replaced the cable.")
            .build(),
    ]
}

/// A memory store pre-populated with the seed tickets and both agents
pub fn seeded_memory() -> MemoryStorage {
    let storage = MemoryStorage::new();

    storage.add_agent("Agent001").expect("Failed to add agent");
    storage.add_agent("Agent002").expect("Failed to add agent");

    for ticket in seed_tickets() {
        storage.save(ticket).expect("Failed to save ticket");
    }

    storage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketFilter;

    #[test]
    fn test_seed_shape() {
        let tickets = seed_tickets();
        assert_eq!(tickets.len(), 5);

        let in_progress = tickets
            .iter()
            .filter(|t| t.status == Status::InProgress)
            .count();
        assert_eq!(in_progress, 1);

        let agent002 = tickets
            .iter()
            .filter(|t| t.assigned_agent_name() == Some("Agent002"))
            .count();
        assert_eq!(agent002, 2);
    }

    #[test]
    fn test_seeded_memory_holds_all_tickets() {
        let storage = seeded_memory();
        let all = storage.find_with_filters(&TicketFilter::default()).unwrap();
        assert_eq!(all.len(), 5);
    }
}
