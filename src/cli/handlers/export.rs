//! `export` command handler

use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::{Ticket, TicketFilter};
use crate::error::{Result, TicketFlowError};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = TicketFlowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(TicketFlowError::InvalidInput(format!(
                "Invalid export format: '{s}'. Expected json, yaml or csv"
            ))),
        }
    }
}

impl ExportFormat {
    /// Render tickets in this format
    pub fn export(self, tickets: &[Ticket]) -> Result<String> {
        match self {
            Self::Json => serde_json::to_string_pretty(tickets).map_err(|e| {
                TicketFlowError::Serialization(format!("Failed to serialize to JSON: {e}"))
            }),
            Self::Yaml => serde_yaml::to_string(tickets).map_err(|e| {
                TicketFlowError::Serialization(format!("Failed to serialize to YAML: {e}"))
            }),
            Self::Csv => export_csv(tickets),
        }
    }
}

/// Dump all tickets to stdout or a file
pub fn handle_export_command(
    format: &str,
    output_path: Option<PathBuf>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;

    let ctx = HandlerContext::new(project_dir)?;
    let tickets = ctx.service().list(&TicketFilter::default())?;
    let content = format.export(&tickets)?;

    match output_path {
        Some(path) => {
            fs::write(&path, content)?;
            output.success(&format!(
                "Exported {} ticket(s) to {}",
                tickets.len(),
                path.display()
            ));
        },
        None => output.info(content.trim_end()),
    }

    Ok(())
}

fn export_csv(tickets: &[Ticket]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record([
            "id",
            "description",
            "status",
            "created_at",
            "closed_at",
            "assigned_agent",
            "resolution_summary",
        ])
        .map_err(|e| TicketFlowError::Serialization(format!("Failed to write CSV header: {e}")))?;

    for ticket in tickets {
        writer
            .write_record([
                ticket
                    .id
                    .map_or_else(String::new, |id| id.to_string()),
                ticket.description.clone(),
                ticket.status.to_string(),
                ticket.created_at.to_rfc3339(),
                ticket
                    .closed_at
                    .map_or_else(String::new, |closed_at| closed_at.to_rfc3339()),
                ticket.assigned_agent_name().unwrap_or_default().to_string(),
                ticket.resolution_summary.clone().unwrap_or_default(),
            ])
            .map_err(|e| {
                TicketFlowError::Serialization(format!("Failed to write CSV record: {e}"))
            })?;
    }

    writer.flush()?;
    String::from_utf8(
        writer
            .into_inner()
            .map_err(|e| TicketFlowError::Serialization(format!("Failed to get CSV data: {e}")))?,
    )
    .map_err(|e| TicketFlowError::Serialization(format!("Invalid UTF-8 in CSV: {e}")))
}
