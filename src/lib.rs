//! glab-ctx - Switch GitLab CLI credentials between named contexts
//!
//! Keeps a personal catalog of user/token pairs per GitLab host and copies
//! the selected one into the glab CLI configuration.
//!
//! # Example
//!
//! ```bash
//! # Activate the "work" context for gitlab.com
//! glab-ctx gitlab.com work
//!
//! # Preview the patched glab config without writing it
//! glab-ctx gitlab.com personal --dry-run
//! ```
//!
//! The users file (`~/.config/glab-ctx/users.yml`) looks like:
//!
//! ```yaml
//! hosts:
//!   gitlab.com:
//!     host: gitlab.com
//!     contexts:
//!       - name: work
//!         user: alice
//!         token: glpat-xxxx
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod glab;
pub mod paths;

pub use cli::Cli;
pub use context::{
    resolve_context, run_switch, Context, ContextStore, HostEntry, ResolvedContext, SwitchOutcome,
    UsersConfig,
};
pub use error::{CtxError, Result};
pub use glab::{GlabConfig, GlabConfigFile};
pub use paths::ConfigPaths;
