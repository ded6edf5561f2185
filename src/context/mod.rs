//! Context management module
//!
//! Named user/token pairs per GitLab host, read from the users file and
//! applied to the glab configuration.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::{run_switch, SwitchOutcome};
pub use models::{Context, HostEntry, ResolvedContext, UsersConfig};
pub use resolve::resolve_context;
pub use store::ContextStore;
