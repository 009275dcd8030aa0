//! Ticket lifecycle engine
//!
//! [`TicketService`] owns the lifecycle state machine: it validates
//! preconditions, computes the next state, and persists the updated ticket
//! through the injected store. Statuses progress strictly
//! `NEW -> IN_PROGRESS -> RESOLVED -> CLOSED`; there is no regression and
//! no skipping of states.
//!
//! Check ordering is part of the contract: the existence check always runs
//! first, and close checks the resolution summary before the status, so a
//! ticket failing both reports the missing summary. Every failure aborts
//! before any persistence write.

use crate::core::{AgentId, Status, Ticket, TicketFilter, TicketId};
use crate::error::{Result, TicketFlowError};
use crate::storage::{AgentDirectory, TicketStore};
use chrono::Utc;

const ONLY_NEW_TICKETS_CAN_BE_ASSIGNED: &str = "Only NEW tickets can be assigned to an agent.";
const ONLY_TICKETS_IN_PROGRESS_CAN_BE_RESOLVED: &str = "Only tickets IN PROGRESS can be resolved.";
const ONLY_RESOLVED_TICKETS_CAN_BE_CLOSED: &str = "Only resolved tickets can be closed";
const CLOSED_TICKETS_CANNOT_BE_UPDATED: &str = "Closed tickets cannot be updated";

/// The ticket lifecycle engine
///
/// Operates on an injected [`TicketStore`] and [`AgentDirectory`]; both
/// collaborators are read/written synchronously within each call, with no
/// cross-call coordination.
pub struct TicketService<S, D> {
    store: S,
    agents: D,
}

impl<S: TicketStore, D: AgentDirectory> TicketService<S, D> {
    /// Create a service over the given store and agent directory
    pub const fn new(store: S, agents: D) -> Self {
        Self { store, agents }
    }

    /// Create a new ticket in the `New` status
    ///
    /// The store assigns the id and the creation time is set here; callers
    /// supply nothing but the description.
    pub fn create(&self, description: &str) -> Result<Ticket> {
        if description.is_empty() {
            return Err(TicketFlowError::MissingDescription);
        }

        let saved = self.store.save(Ticket::new(description))?;
        tracing::debug!(id = ?saved.id, "created ticket");
        Ok(saved)
    }

    /// Assign an agent to a `New` ticket, moving it to `InProgress`
    ///
    /// The agent lookup runs after the status check; a failed lookup leaves
    /// the ticket unmodified.
    pub fn assign_agent(&self, ticket_id: TicketId, agent_id: AgentId) -> Result<Ticket> {
        let mut ticket = self.fetch(ticket_id)?;

        if ticket.status != Status::New {
            return Err(TicketFlowError::invalid_state(
                ONLY_NEW_TICKETS_CAN_BE_ASSIGNED,
            ));
        }

        let agent = self
            .agents
            .find_by_id(agent_id)?
            .ok_or(TicketFlowError::AgentNotFound { id: agent_id })?;

        ticket.status = Status::InProgress;
        ticket.assigned_agent = Some(agent);

        let saved = self.store.save(ticket)?;
        tracing::debug!(id = %ticket_id, agent = %agent_id, "assigned agent");
        Ok(saved)
    }

    /// Move an `InProgress` ticket to `Resolved`
    ///
    /// The resolution summary is neither required nor touched here; it only
    /// gates closure.
    pub fn resolve(&self, ticket_id: TicketId) -> Result<Ticket> {
        let mut ticket = self.fetch(ticket_id)?;

        if ticket.status != Status::InProgress {
            return Err(TicketFlowError::invalid_state(
                ONLY_TICKETS_IN_PROGRESS_CAN_BE_RESOLVED,
            ));
        }

        ticket.status = Status::Resolved;

        let saved = self.store.save(ticket)?;
        tracing::debug!(id = %ticket_id, "resolved ticket");
        Ok(saved)
    }

    /// Close a `Resolved` ticket, stamping the closure time
    ///
    /// The summary check runs before the status check, so a ticket failing
    /// both surfaces `MissingResolutionSummary`.
    pub fn close(&self, ticket_id: TicketId) -> Result<Ticket> {
        let mut ticket = self.fetch(ticket_id)?;

        if !ticket.has_resolution_summary() {
            return Err(TicketFlowError::MissingResolutionSummary);
        }
        if ticket.status != Status::Resolved {
            return Err(TicketFlowError::invalid_state(
                ONLY_RESOLVED_TICKETS_CAN_BE_CLOSED,
            ));
        }

        ticket.status = Status::Closed;
        ticket.closed_at = Some(Utc::now());

        let saved = self.store.save(ticket)?;
        tracing::debug!(id = %ticket_id, "closed ticket");
        Ok(saved)
    }

    /// Overwrite the description and resolution summary of an open ticket
    ///
    /// Unlike create, no emptiness check applies here. Status, timestamps
    /// and the assigned agent are untouched.
    pub fn update(
        &self,
        ticket_id: TicketId,
        description: impl Into<String>,
        resolution_summary: Option<String>,
    ) -> Result<Ticket> {
        let mut ticket = self.fetch(ticket_id)?;

        if ticket.status == Status::Closed {
            return Err(TicketFlowError::invalid_state(
                CLOSED_TICKETS_CANNOT_BE_UPDATED,
            ));
        }

        ticket.description = description.into();
        ticket.resolution_summary = resolution_summary;

        let saved = self.store.save(ticket)?;
        tracing::debug!(id = %ticket_id, "updated ticket");
        Ok(saved)
    }

    /// Fetch a ticket by id without modifying it
    pub fn get(&self, ticket_id: TicketId) -> Result<Ticket> {
        self.fetch(ticket_id)
    }

    /// List tickets matching the filter, in the store's natural order
    pub fn list(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        self.store.find_with_filters(filter)
    }

    fn fetch(&self, ticket_id: TicketId) -> Result<Ticket> {
        self.store
            .find_by_id(ticket_id)?
            .ok_or(TicketFlowError::TicketNotFound { id: ticket_id })
    }
}
