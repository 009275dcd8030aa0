//! Command-line interface for ticketflow
//!
//! Argument parsing lives here; each command is executed by a thin handler
//! in [`handlers`] that maps directly onto a service operation or a
//! storage concern.

pub mod handlers;
pub mod output;
pub mod utils;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments
#[derive(Parser)]
#[command(
    name = "ticketflow",
    about = "Track support tickets through their lifecycle",
    version
)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the project directory
    #[arg(long, short = 'p', global = true)]
    pub project: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a ticketflow project
    Init {
        /// Project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Create a new ticket
    New {
        /// What the ticket is about
        description: String,
    },

    /// Assign an agent to a NEW ticket
    Assign {
        /// Ticket id
        ticket: String,
        /// Agent id
        agent: String,
    },

    /// Mark an IN_PROGRESS ticket as resolved
    Resolve {
        /// Ticket id
        ticket: String,
    },

    /// Close a RESOLVED ticket
    Close {
        /// Ticket id
        ticket: String,
        /// Set the resolution summary before closing
        #[arg(long)]
        summary: Option<String>,
    },

    /// Edit the description and resolution summary of an open ticket
    Edit {
        /// Ticket id
        ticket: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New resolution summary
        #[arg(long)]
        summary: Option<String>,
    },

    /// Show a single ticket
    Show {
        /// Ticket id
        ticket: String,
    },

    /// List tickets matching the given filters
    List {
        /// Statuses to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        status: Vec<String>,
        /// Only tickets created on or after this date
        #[arg(long)]
        since: Option<String>,
        /// Only tickets created on or before this date
        #[arg(long)]
        until: Option<String>,
        /// Only tickets assigned to this agent name
        #[arg(long)]
        agent: Option<String>,
    },

    /// Manage the agent directory
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },

    /// Export all tickets
    Export {
        /// Output format: json, yaml or csv
        #[arg(long, default_value = "json")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Agent directory subcommands
#[derive(Subcommand)]
pub enum AgentCommands {
    /// Register an agent
    Add {
        /// Agent display name
        name: String,
    },
    /// List registered agents
    List,
}
