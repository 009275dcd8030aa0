use crate::core::{Agent, AgentId, Ticket, TicketFilter, TicketId};
use crate::error::Result;

#[cfg(test)]
use mockall::automock;

/// Repository trait for ticket storage operations
///
/// This trait defines the interface for storing and retrieving tickets,
/// allowing for different storage implementations. The store owns id
/// assignment: a ticket saved without an id gets the next sequential one.
#[cfg_attr(test, automock)]
pub trait TicketStore: Send + Sync {
    /// Persist a ticket, assigning an id on first save
    ///
    /// Returns the persisted state, including the assigned id.
    fn save(&self, ticket: Ticket) -> Result<Ticket>;

    /// Look up a ticket by id
    fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>>;

    /// Return tickets matching the filter, in the store's natural order
    fn find_with_filters(&self, filter: &TicketFilter) -> Result<Vec<Ticket>>;
}

/// Lookup trait for the externally-owned agent directory
///
/// The lifecycle engine only reads agents; registration is an inherent
/// operation of the concrete storages.
#[cfg_attr(test, automock)]
pub trait AgentDirectory: Send + Sync {
    /// Look up an agent by id
    fn find_by_id(&self, id: AgentId) -> Result<Option<Agent>>;
}
