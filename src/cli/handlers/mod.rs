//! Command handlers
//!
//! One thin handler per command: resolve the project, call the service (or
//! the storage, for agent-directory concerns), print the result.

mod agent;
mod assign;
mod close;
mod common;
mod edit;
mod export;
mod init;
mod list;
mod new;
mod resolve;
mod show;

pub use agent::handle_agent_command;
pub use assign::handle_assign_command;
pub use close::handle_close_command;
pub use common::HandlerContext;
pub use edit::handle_edit_command;
pub use export::handle_export_command;
pub use init::handle_init;
pub use list::handle_list_command;
pub use new::handle_new_command;
pub use resolve::handle_resolve_command;
pub use show::handle_show_command;
