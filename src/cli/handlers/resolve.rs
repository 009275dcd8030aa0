//! `resolve` command handler

use super::common::{HandlerContext, display_id};
use crate::cli::output::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;

/// Mark an IN_PROGRESS ticket as resolved
pub fn handle_resolve_command(
    ticket: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket_id: TicketId = ticket.parse()?;

    let ctx = HandlerContext::new(project_dir)?;
    let ticket = ctx.service().resolve(ticket_id)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!(
            "Resolved ticket #{} [{}]",
            display_id(&ticket),
            ticket.status
        ));
    }

    Ok(())
}
