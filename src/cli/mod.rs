//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::{defaults, env};

/// Switch the glab CLI between named user contexts
#[derive(Parser, Debug)]
#[command(name = "glab-ctx")]
#[command(version)]
#[command(
    about = "Switch the active glab user and token between named contexts",
    long_about = None
)]
#[command(after_help = "EXAMPLES:\n  \
        glab-ctx gitlab.com work\n  \
        glab-ctx gitlab.com personal --dry-run\n  \
        glab-ctx --users-file ./users.yml gitlab.corp.com ci")]
pub struct Cli {
    /// Host key in the users file
    pub host: String,

    /// Name of the context to activate
    pub context: String,

    /// Path to the users file (default: ~/.config/glab-ctx/users.yml)
    #[arg(long, env = env::USERS_FILE)]
    pub users_file: Option<PathBuf>,

    /// Path to the glab config file (default: ~/.config/glab-cli/config.yml)
    #[arg(long, env = env::GLAB_CONFIG)]
    pub glab_config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Print the patched glab config instead of writing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
