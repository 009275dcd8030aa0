//! `init` command handler

use crate::cli::output::OutputFormatter;
use crate::cli::utils::DATA_DIR;
use crate::config::ProjectConfig;
use crate::error::{Result, TicketFlowError};
use crate::storage::FileStorage;
use std::env;
use std::path::PathBuf;

/// Create the project data directory and its config file
pub fn handle_init(
    name: Option<String>,
    project_dir: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let base = match project_dir {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };
    let data_dir = base.join(DATA_DIR);

    let storage = FileStorage::new(&data_dir);
    if storage.is_initialized() {
        return Err(TicketFlowError::ProjectAlreadyInitialized {
            path: data_dir.display().to_string(),
        });
    }
    storage.init()?;

    let project_name = name.unwrap_or_else(|| {
        base.file_name().map_or_else(
            || "ticketflow".to_string(),
            |dir| dir.to_string_lossy().into_owned(),
        )
    });
    ProjectConfig::new(&project_name).save(&data_dir)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "project": project_name,
            "data_dir": data_dir.display().to_string(),
        }))?;
    } else {
        output.success(&format!("Initialized project '{project_name}'"));
        output.info(&format!("Data directory: {}", data_dir.display()));
    }

    Ok(())
}
