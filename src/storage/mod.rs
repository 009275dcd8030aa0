//! Storage layer for ticketflow
//!
//! The abstract collaborators of the lifecycle engine are the
//! [`TicketStore`] and [`AgentDirectory`] traits. Two implementations are
//! provided: [`MemoryStorage`] for tests and embedding, and [`FileStorage`]
//! for the CLI's on-disk project data.

mod file;
mod memory;
mod repository;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use repository::{AgentDirectory, TicketStore};

#[cfg(test)]
pub use repository::{MockAgentDirectory, MockTicketStore};
