//! In-memory storage implementation

use super::{AgentDirectory, TicketStore};
use crate::core::{Agent, AgentId, Ticket, TicketFilter, TicketId};
use crate::error::{Result, TicketFlowError};
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory store for tickets and agents
///
/// Cloning yields another handle to the same underlying state, so the same
/// storage can serve as both the ticket store and the agent directory of a
/// service. Tickets keep insertion order, which doubles as id order since
/// ids are assigned sequentially and tickets are never deleted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    tickets: Vec<Ticket>,
    agents: Vec<Agent>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent, assigning the next sequential id
    pub fn add_agent(&self, name: impl Into<String>) -> Result<Agent> {
        let mut state = self.state()?;
        let agent = Agent::new(AgentId::new(state.agents.len() as u64 + 1), name);
        state.agents.push(agent.clone());
        Ok(agent)
    }

    /// All registered agents, in registration order
    pub fn agents(&self) -> Result<Vec<Agent>> {
        Ok(self.state()?.agents.clone())
    }

    fn state(&self) -> Result<MutexGuard<'_, State>> {
        self.inner
            .lock()
            .map_err(|_| TicketFlowError::custom("ticket store lock poisoned"))
    }
}

impl TicketStore for MemoryStorage {
    fn save(&self, mut ticket: Ticket) -> Result<Ticket> {
        let mut state = self.state()?;

        match ticket.id {
            Some(id) => {
                if let Some(slot) = state.tickets.iter_mut().find(|t| t.id == Some(id)) {
                    *slot = ticket.clone();
                } else {
                    state.tickets.push(ticket.clone());
                }
            },
            None => {
                // Tickets are never deleted, so len + 1 is the next free id.
                let id = TicketId::new(state.tickets.len() as u64 + 1);
                ticket.id = Some(id);
                state.tickets.push(ticket.clone());
            },
        }

        Ok(ticket)
    }

    fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>> {
        Ok(self
            .state()?
            .tickets
            .iter()
            .find(|ticket| ticket.id == Some(id))
            .cloned())
    }

    fn find_with_filters(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        Ok(self
            .state()?
            .tickets
            .iter()
            .filter(|ticket| filter.matches(ticket))
            .cloned()
            .collect())
    }
}

impl AgentDirectory for MemoryStorage {
    fn find_by_id(&self, id: AgentId) -> Result<Option<Agent>> {
        Ok(self
            .state()?
            .agents
            .iter()
            .find(|agent| agent.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;
    use crate::test_utils::seeded_memory;
    use chrono::{Duration, Utc};

    #[test]
    fn test_save_assigns_sequential_ids() {
        let storage = MemoryStorage::new();

        let first = storage.save(Ticket::new("first")).unwrap();
        let second = storage.save(Ticket::new("second")).unwrap();

        assert_eq!(first.id, Some(TicketId::new(1)));
        assert_eq!(second.id, Some(TicketId::new(2)));
    }

    #[test]
    fn test_save_with_id_replaces_existing() {
        let storage = MemoryStorage::new();

        let mut ticket = storage.save(Ticket::new("original")).unwrap();
        ticket.description = "updated".to_string();
        let saved = storage.save(ticket.clone()).unwrap();

        assert_eq!(saved.description, "updated");
        let loaded = TicketStore::find_by_id(&storage, TicketId::new(1)).unwrap().unwrap();
        assert_eq!(loaded.description, "updated");

        let all = storage.find_with_filters(&TicketFilter::default()).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_find_by_id_returns_none_for_unknown() {
        let storage = MemoryStorage::new();
        assert!(TicketStore::find_by_id(&storage, TicketId::new(999)).unwrap().is_none());
    }

    #[test]
    fn test_no_filters_returns_all_tickets() {
        let storage = seeded_memory();
        let tickets = storage.find_with_filters(&TicketFilter::default()).unwrap();
        assert_eq!(tickets.len(), 5);
    }

    #[test]
    fn test_filter_by_status_returns_matching_tickets() {
        let storage = seeded_memory();

        let filter = TicketFilter {
            statuses: vec![Status::InProgress],
            ..Default::default()
        };
        let tickets = storage.find_with_filters(&filter).unwrap();

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].status, Status::InProgress);
    }

    #[test]
    fn test_filter_by_date_range_returns_tickets_within_range() {
        let storage = seeded_memory();
        let now = Utc::now();

        let filter = TicketFilter {
            since: Some(now - Duration::days(3)),
            until: Some(now),
            ..Default::default()
        };
        let tickets = storage.find_with_filters(&filter).unwrap();

        assert_eq!(tickets.len(), 3);
    }

    #[test]
    fn test_filter_by_start_date_returns_tickets_after_it() {
        let storage = seeded_memory();
        let now = Utc::now();

        let filter = TicketFilter {
            since: Some(now - Duration::days(3)),
            ..Default::default()
        };
        let tickets = storage.find_with_filters(&filter).unwrap();

        assert_eq!(tickets.len(), 3);
    }

    #[test]
    fn test_filter_by_end_date_returns_tickets_before_it() {
        let storage = seeded_memory();
        let now = Utc::now();

        let filter = TicketFilter {
            until: Some(now - Duration::days(3)),
            ..Default::default()
        };
        let tickets = storage.find_with_filters(&filter).unwrap();

        assert_eq!(tickets.len(), 2);
    }

    #[test]
    fn test_filter_by_agent_returns_tickets_with_matching_agent() {
        let storage = seeded_memory();

        let filter = TicketFilter {
            assigned_agent: Some("Agent002".to_string()),
            ..Default::default()
        };
        let tickets = storage.find_with_filters(&filter).unwrap();

        assert_eq!(tickets.len(), 2);
        for ticket in &tickets {
            assert_eq!(ticket.assigned_agent_name(), Some("Agent002"));
        }
    }

    #[test]
    fn test_multiple_filters_combine_as_conjunction() {
        let storage = seeded_memory();
        let now = Utc::now();

        let filter = TicketFilter {
            statuses: vec![Status::New, Status::Resolved],
            until: Some(now - Duration::days(3)),
            ..Default::default()
        };
        let tickets = storage.find_with_filters(&filter).unwrap();

        assert_eq!(tickets.len(), 2);
    }

    #[test]
    fn test_results_keep_insertion_order() {
        let storage = seeded_memory();
        let tickets = storage.find_with_filters(&TicketFilter::default()).unwrap();

        let ids: Vec<_> = tickets.iter().filter_map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_agent_directory_lookup() {
        let storage = MemoryStorage::new();
        let agent = storage.add_agent("Agent001").unwrap();

        let found = AgentDirectory::find_by_id(&storage, agent.id).unwrap();
        assert_eq!(found, Some(agent));
        assert!(
            AgentDirectory::find_by_id(&storage, AgentId::new(999))
                .unwrap()
                .is_none()
        );
    }
}
