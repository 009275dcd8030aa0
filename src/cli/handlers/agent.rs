//! `agent` subcommand handlers

use super::common::HandlerContext;
use crate::cli::AgentCommands;
use crate::cli::output::OutputFormatter;
use crate::error::Result;

/// Manage the agent directory
pub fn handle_agent_command(
    command: AgentCommands,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;

    match command {
        AgentCommands::Add { name } => {
            let agent = ctx.storage.add_agent(name)?;
            if output.is_json() {
                output.print_json(&agent)?;
            } else {
                output.success(&format!("Registered agent '{}' (#{})", agent.name, agent.id));
            }
        },
        AgentCommands::List => {
            let agents = ctx.storage.agents()?;
            if output.is_json() {
                output.print_json(&agents)?;
            } else if agents.is_empty() {
                output.info("No agents registered");
            } else {
                for agent in &agents {
                    output.info(&format!("#{} {}", agent.id, agent.name));
                }
            }
        },
    }

    Ok(())
}
