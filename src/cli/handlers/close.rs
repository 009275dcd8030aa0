//! `close` command handler

use super::common::{HandlerContext, display_id};
use crate::cli::output::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;

/// Close a RESOLVED ticket
///
/// With `--summary`, the resolution summary is written first (through the
/// regular update operation, so its own validation still applies) and the
/// close runs against the updated ticket.
pub fn handle_close_command(
    ticket: &str,
    summary: Option<String>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket_id: TicketId = ticket.parse()?;

    let ctx = HandlerContext::new(project_dir)?;
    let service = ctx.service();

    if let Some(summary) = summary {
        let current = service.get(ticket_id)?;
        service.update(ticket_id, current.description, Some(summary))?;
    }

    let ticket = service.close(ticket_id)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!(
            "Closed ticket #{} [{}]",
            display_id(&ticket),
            ticket.status
        ));
    }

    Ok(())
}
