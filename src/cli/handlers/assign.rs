//! `assign` command handler

use super::common::{HandlerContext, display_id};
use crate::cli::output::OutputFormatter;
use crate::core::{AgentId, TicketId};
use crate::error::Result;

/// Assign an agent to a NEW ticket
pub fn handle_assign_command(
    ticket: &str,
    agent: &str,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket_id: TicketId = ticket.parse()?;
    let agent_id: AgentId = agent.parse()?;

    let ctx = HandlerContext::new(project_dir)?;
    let ticket = ctx.service().assign_agent(ticket_id, agent_id)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        let agent_name = ticket.assigned_agent_name().unwrap_or("unknown");
        output.success(&format!(
            "Assigned {agent_name} to ticket #{} [{}]",
            display_id(&ticket),
            ticket.status
        ));
    }

    Ok(())
}
