//! `list` command handler

use super::common::{HandlerContext, display_id};
use crate::cli::output::OutputFormatter;
use crate::cli::utils;
use crate::core::{Status, TicketFilter};
use crate::error::Result;

/// List tickets matching the given filter criteria
///
/// Criteria left unset drop out of the conjunction; with none at all,
/// every ticket is listed in id order.
pub fn handle_list_command(
    status: Vec<String>,
    since: Option<String>,
    until: Option<String>,
    agent: Option<String>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let statuses = status
        .iter()
        .map(|value| value.parse::<Status>())
        .collect::<Result<Vec<_>>>()?;

    let filter = TicketFilter {
        statuses,
        since: since.as_deref().map(utils::parse_since).transpose()?,
        until: until.as_deref().map(utils::parse_until).transpose()?,
        assigned_agent: agent,
    };

    let ctx = HandlerContext::new(project_dir)?;
    let tickets = ctx.service().list(&filter)?;

    if output.is_json() {
        return output.print_json(&tickets);
    }

    if tickets.is_empty() {
        output.info("No tickets found");
        return Ok(());
    }

    for ticket in &tickets {
        let agent = ticket
            .assigned_agent_name()
            .map_or_else(String::new, |name| format!(" ({name})"));
        output.info(&format!(
            "#{} [{}] {}{agent}",
            display_id(ticket),
            ticket.status,
            ticket.description
        ));
    }
    output.info(&format!("{} ticket(s)", tickets.len()));

    Ok(())
}
