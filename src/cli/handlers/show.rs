//! `show` command handler

use super::common::{HandlerContext, print_ticket};
use crate::cli::output::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;

/// Display a single ticket
pub fn handle_show_command(
    ticket: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket_id: TicketId = ticket.parse()?;

    let ctx = HandlerContext::new(project_dir)?;
    let ticket = ctx.service().get(ticket_id)?;

    print_ticket(&ticket, output)
}
