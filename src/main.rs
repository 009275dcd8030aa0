//! ticketflow - support ticket lifecycle tracking
//!
//! This is the main entry point for the ticketflow CLI. It parses the
//! command line and dispatches to the appropriate command handler; the
//! lifecycle rules themselves live in the library's service layer.

use clap::Parser;
use std::process;
use ticketflow::cli::{Cli, Commands, OutputFormatter, handlers};
use ticketflow::error::{Result, TicketFlowError};

fn main() {
    let cli = Cli::parse();

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    // Execute the command and handle errors
    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    dispatch_command(cli.command, cli.project.as_deref(), formatter)
}

/// Dispatch to the handler for the parsed command
fn dispatch_command(
    command: Commands,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Init { name } => handlers::handle_init(name, project, formatter),
        Commands::New { description } => {
            handlers::handle_new_command(description, project, formatter)
        },
        Commands::Assign { ticket, agent } => {
            handlers::handle_assign_command(&ticket, &agent, project, formatter)
        },
        Commands::Resolve { ticket } => {
            handlers::handle_resolve_command(&ticket, project, formatter)
        },
        Commands::Close { ticket, summary } => {
            handlers::handle_close_command(&ticket, summary, project, formatter)
        },
        Commands::Edit {
            ticket,
            description,
            summary,
        } => handlers::handle_edit_command(&ticket, description, summary, project, formatter),
        Commands::Show { ticket } => handlers::handle_show_command(&ticket, project, formatter),
        Commands::List {
            status,
            since,
            until,
            agent,
        } => handlers::handle_list_command(status, since, until, agent, project, formatter),
        Commands::Agent { command } => {
            handlers::handle_agent_command(command, project, formatter)
        },
        Commands::Export { format, output } => {
            handlers::handle_export_command(&format, output, project, formatter)
        },
    }
}

/// Print an error and leave exiting to the caller
fn handle_error(error: &TicketFlowError, formatter: &OutputFormatter) {
    formatter.error(&error.to_string());
}
