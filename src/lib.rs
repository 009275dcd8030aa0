//! ticketflow - A support ticket lifecycle tracking system
//!
//! This crate tracks support tickets through a fixed lifecycle:
//! - Tickets are created in the `NEW` status
//! - Assigning an agent moves them to `IN_PROGRESS`
//! - Resolving moves them to `RESOLVED`
//! - Closing (with a mandatory resolution summary) moves them to `CLOSED`
//!
//! Statuses never regress and never skip a step. Alongside the lifecycle
//! engine, a multi-criteria filter query lists tickets by status set,
//! creation-date range, and assigned-agent name.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticketflow::service::TicketService;
//! use ticketflow::storage::MemoryStorage;
//!
//! let storage = MemoryStorage::new();
//! let agent = storage.add_agent("Agent001")?;
//! let service = TicketService::new(storage.clone(), storage);
//!
//! let ticket = service.create("Fix the printer")?;
//! let id = ticket.id.expect("store assigns an id");
//! service.assign_agent(id, agent.id)?;
//! service.resolve(id)?;
//! service.update(id, "Fix the printer", Some("Replaced the toner.".into()))?;
//! service.close(id)?;
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::cast_possible_truncation)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod service;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketFlowError};
