//! YAML file-backed storage implementation
//!
//! Tickets live one file per ticket under `<root>/tickets/<id>.yaml`;
//! agents live together in `<root>/agents.yaml`. The root is the project
//! data directory (`.ticketflow`) created by `init`.

use super::{AgentDirectory, TicketStore};
use crate::core::{Agent, AgentId, Ticket, TicketFilter, TicketId};
use crate::error::{Result, TicketFlowError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store for tickets and agents
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a handle on a project data directory
    ///
    /// The directory is not touched until an operation runs; use [`init`]
    /// to create the skeleton for a new project.
    ///
    /// [`init`]: FileStorage::init
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the directory skeleton for a new project
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.tickets_dir())?;
        tracing::debug!(root = %self.root.display(), "initialized project storage");
        Ok(())
    }

    /// Whether the data directory has been initialized
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.tickets_dir().is_dir()
    }

    /// The project data directory this store operates on
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn tickets_dir(&self) -> PathBuf {
        self.root.join("tickets")
    }

    fn ticket_path(&self, id: TicketId) -> PathBuf {
        self.tickets_dir().join(format!("{id}.yaml"))
    }

    fn agents_path(&self) -> PathBuf {
        self.root.join("agents.yaml")
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(TicketFlowError::ProjectNotInitialized)
        }
    }

    fn load_all(&self) -> Result<Vec<Ticket>> {
        self.ensure_initialized()?;

        let mut tickets = Vec::new();
        for entry in fs::read_dir(self.tickets_dir())? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                tickets.push(Self::read_ticket(&path)?);
            }
        }

        // Directory listing order is arbitrary; id order restores the
        // store's natural (insertion) order.
        tickets.sort_by_key(|ticket| ticket.id);
        Ok(tickets)
    }

    fn read_ticket(path: &Path) -> Result<Ticket> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| {
            TicketFlowError::ParseError(format!("Invalid ticket file {}: {e}", path.display()))
        })
    }

    fn write_ticket(&self, ticket: &Ticket, id: TicketId) -> Result<()> {
        let content = serde_yaml::to_string(ticket).map_err(|e| {
            TicketFlowError::Serialization(format!("Failed to serialize ticket {id}: {e}"))
        })?;
        fs::write(self.ticket_path(id), content)?;
        Ok(())
    }

    fn next_ticket_id(&self) -> Result<TicketId> {
        let max = self
            .load_all()?
            .iter()
            .filter_map(|ticket| ticket.id)
            .map(TicketId::value)
            .max()
            .unwrap_or(0);
        Ok(TicketId::new(max + 1))
    }

    /// Register an agent, assigning the next sequential id
    pub fn add_agent(&self, name: impl Into<String>) -> Result<Agent> {
        self.ensure_initialized()?;

        let mut agents = self.agents()?;
        let next = agents
            .iter()
            .map(|agent| agent.id.value())
            .max()
            .unwrap_or(0)
            + 1;
        let agent = Agent::new(AgentId::new(next), name);
        agents.push(agent.clone());

        let content = serde_yaml::to_string(&agents).map_err(|e| {
            TicketFlowError::Serialization(format!("Failed to serialize agents: {e}"))
        })?;
        fs::write(self.agents_path(), content)?;

        tracing::debug!(id = %agent.id, name = %agent.name, "registered agent");
        Ok(agent)
    }

    /// All registered agents, in registration order
    pub fn agents(&self) -> Result<Vec<Agent>> {
        self.ensure_initialized()?;

        let path = self.agents_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| TicketFlowError::ParseError(format!("Invalid agents file: {e}")))
    }
}

impl TicketStore for FileStorage {
    fn save(&self, mut ticket: Ticket) -> Result<Ticket> {
        self.ensure_initialized()?;

        let id = match ticket.id {
            Some(id) => id,
            None => {
                let id = self.next_ticket_id()?;
                ticket.id = Some(id);
                id
            },
        };

        self.write_ticket(&ticket, id)?;
        tracing::debug!(%id, status = %ticket.status, "saved ticket");
        Ok(ticket)
    }

    fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>> {
        self.ensure_initialized()?;

        let path = self.ticket_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_ticket(&path).map(Some)
    }

    fn find_with_filters(&self, filter: &TicketFilter) -> Result<Vec<Ticket>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|ticket| filter.matches(ticket))
            .collect())
    }
}

impl AgentDirectory for FileStorage {
    fn find_by_id(&self, id: AgentId) -> Result<Option<Agent>> {
        Ok(self.agents()?.into_iter().find(|agent| agent.id == id))
    }
}
