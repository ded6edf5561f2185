//! Location of the context store and the glab configuration file

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{env, paths};
use crate::error::{CtxError, Result};

/// Resolved file locations for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Context store (users.yml)
    pub users_file: PathBuf,
    /// glab configuration (config.yml)
    pub glab_config: PathBuf,
}

impl ConfigPaths {
    /// Resolve paths, preferring explicit overrides over the defaults
    /// derived from the environment and home directory.
    pub fn resolve(users_file: Option<PathBuf>, glab_config: Option<PathBuf>) -> Result<Self> {
        let users_file = match users_file {
            Some(path) => path,
            None => default_users_path()?,
        };
        let glab_config = match glab_config {
            Some(path) => path,
            None => default_glab_config(&config_root()?, non_empty_var(env::GLAB_CONFIG_DIR)),
        };

        debug!(
            "Using users file {} and glab config {}",
            users_file.display(),
            glab_config.display()
        );
        Ok(Self {
            users_file,
            glab_config,
        })
    }

    /// Create the parent directories of both files if missing
    pub fn ensure_parent_dirs(&self) -> Result<()> {
        ensure_parent_dir(&self.users_file)?;
        ensure_parent_dir(&self.glab_config)
    }
}

/// Default context store location
pub fn default_users_path() -> Result<PathBuf> {
    Ok(default_users_file(&config_root()?))
}

/// Base directory for per-user configuration
fn config_root() -> Result<PathBuf> {
    config_root_from(non_empty_var(env::XDG_CONFIG_HOME), dirs::home_dir())
}

fn config_root_from(xdg_config_home: Option<String>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = xdg_config_home {
        return Ok(PathBuf::from(dir));
    }
    home.map(|h| h.join(paths::DEFAULT_CONFIG_ROOT))
        .ok_or_else(|| CtxError::Config("Could not determine home directory".to_string()))
}

fn default_users_file(root: &Path) -> PathBuf {
    root.join(paths::USERS_DIR_NAME).join(paths::USERS_FILE_NAME)
}

fn default_glab_config(root: &Path, glab_config_dir: Option<String>) -> PathBuf {
    match glab_config_dir {
        Some(dir) => PathBuf::from(dir).join(paths::GLAB_FILE_NAME),
        None => root.join(paths::GLAB_DIR_NAME).join(paths::GLAB_FILE_NAME),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                CtxError::Config(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}
