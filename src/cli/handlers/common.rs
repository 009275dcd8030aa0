//! Shared handler context and output helpers

use crate::cli::output::OutputFormatter;
use crate::cli::utils::{self, DATA_DIR};
use crate::core::Ticket;
use crate::error::Result;
use crate::service::TicketService;
use crate::storage::FileStorage;

/// Common context for handler operations
pub struct HandlerContext {
    pub storage: FileStorage,
}

impl HandlerContext {
    /// Resolve the project root and open its storage
    pub fn new(project_dir: Option<&str>) -> Result<Self> {
        let project_root = utils::find_project_root(project_dir)?;
        let storage = FileStorage::new(project_root.join(DATA_DIR));
        Ok(Self { storage })
    }

    /// Build a lifecycle service over this project's storage
    ///
    /// The same storage serves as both the ticket store and the agent
    /// directory.
    #[must_use]
    pub fn service(&self) -> TicketService<FileStorage, FileStorage> {
        TicketService::new(self.storage.clone(), self.storage.clone())
    }
}

/// Render one ticket, as JSON or a human-readable block
pub fn print_ticket(ticket: &Ticket, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(ticket);
    }

    output.info(&format!(
        "Ticket #{} [{}]",
        display_id(ticket),
        ticket.status
    ));
    output.info(&format!("  Description: {}", ticket.description));
    output.info(&format!(
        "  Created: {}",
        ticket.created_at.format("%Y-%m-%d %H:%M")
    ));
    if let Some(agent) = &ticket.assigned_agent {
        output.info(&format!("  Assigned to: {} (#{})", agent.name, agent.id));
    }
    if let Some(summary) = &ticket.resolution_summary {
        output.info(&format!("  Resolution: {summary}"));
    }
    if let Some(closed_at) = ticket.closed_at {
        output.info(&format!("  Closed: {}", closed_at.format("%Y-%m-%d %H:%M")));
    }
    Ok(())
}

/// Id for display; a persisted ticket always has one
pub fn display_id(ticket: &Ticket) -> String {
    ticket
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string())
}
