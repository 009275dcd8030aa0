//! `edit` command handler

use super::common::{HandlerContext, print_ticket};
use crate::cli::output::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;

/// Overwrite the description and resolution summary of an open ticket
///
/// Flags omitted on the command line keep the current value; the service
/// itself always overwrites both fields with what it is given.
pub fn handle_edit_command(
    ticket: &str,
    description: Option<String>,
    summary: Option<String>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket_id: TicketId = ticket.parse()?;

    let ctx = HandlerContext::new(project_dir)?;
    let service = ctx.service();

    let current = service.get(ticket_id)?;
    let description = description.unwrap_or(current.description);
    let summary = summary.or(current.resolution_summary);

    let ticket = service.update(ticket_id, description, summary)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success("Updated ticket");
        print_ticket(&ticket, output)?;
    }

    Ok(())
}
