//! `new` command handler

use super::common::{HandlerContext, display_id};
use crate::cli::output::OutputFormatter;
use crate::error::Result;

/// Create a ticket from the given description
pub fn handle_new_command(
    description: String,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let ticket = ctx.service().create(&description)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!(
            "Created ticket #{} [{}]",
            display_id(&ticket),
            ticket.status
        ));
    }

    Ok(())
}
