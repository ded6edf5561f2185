//! Context store file I/O

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CtxError, Result};
use crate::paths::default_users_path;

use super::models::UsersConfig;

/// Reads the users file holding the named contexts
pub struct ContextStore {
    path: PathBuf,
}

impl ContextStore {
    /// Create a store using the default users file path
    /// (~/.config/glab-ctx/users.yml)
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(default_users_path()?))
    }

    /// Create a store reading from the given path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the users file from disk.
    /// Errors if the file is missing or not a valid users document.
    pub fn load(&self) -> Result<UsersConfig> {
        debug!("Loading context store from {}", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CtxError::NotFound(self.path.clone()),
            _ => CtxError::Read {
                path: self.path.clone(),
                message: e.to_string(),
            },
        })?;

        let config: UsersConfig = serde_yml::from_str(&content).map_err(|e| CtxError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        debug!("Context store lists {} host(s)", config.hosts.len());
        Ok(config)
    }
}
