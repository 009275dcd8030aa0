//! Project configuration
//!
//! A small YAML file written into the project data directory by `init`.
//! Nothing in the lifecycle engine depends on it; it records what the
//! project is and when it was set up.

use crate::error::{Result, TicketFlowError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.yaml";

/// Per-project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Human-readable project name
    pub name: String,
    /// When the project was initialized
    pub created_at: DateTime<Utc>,
}

impl ProjectConfig {
    /// Create a config for a freshly initialized project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    /// Load the config from a project data directory
    pub fn load(data_dir: &Path) -> Result<Self> {
        let content = fs::read_to_string(Self::path(data_dir))?;
        serde_yaml::from_str(&content)
            .map_err(|e| TicketFlowError::ParseError(format!("Invalid config file: {e}")))
    }

    /// Write the config into a project data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).map_err(|e| {
            TicketFlowError::Serialization(format!("Failed to serialize config: {e}"))
        })?;
        fs::write(Self::path(data_dir), content)?;
        Ok(())
    }

    fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }
}
