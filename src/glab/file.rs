//! glab configuration file I/O

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::paths;
use crate::error::{CtxError, Result};

use super::document::GlabConfig;

/// Handles reading and writing glab's config.yml
pub struct GlabConfigFile {
    path: PathBuf,
}

impl GlabConfigFile {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the glab configuration from disk.
    /// The file is never created: a missing file is an error.
    pub fn load(&self) -> Result<GlabConfig> {
        debug!("Loading glab config from {}", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CtxError::NotFound(self.path.clone()),
            _ => CtxError::Read {
                path: self.path.clone(),
                message: e.to_string(),
            },
        })?;

        GlabConfig::from_yaml(&content).map_err(|e| self.parse_error(e))
    }

    /// Save the glab configuration to disk.
    /// Uses atomic write (tmp file + rename) so a failure never truncates
    /// the existing file. A symlinked config is written through to its target.
    pub fn save(&self, config: &GlabConfig) -> Result<()> {
        let yaml = config.to_yaml().map_err(|e| self.write_error(e))?;

        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let tmp_path = target.with_extension(paths::TMP_EXTENSION);
        fs::write(&tmp_path, &yaml).map_err(|e| CtxError::Write {
            path: tmp_path.clone(),
            message: e.to_string(),
        })?;

        // Set 0600 permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            if let Err(e) = fs::set_permissions(&tmp_path, permissions) {
                let _ = fs::remove_file(&tmp_path);
                return Err(CtxError::Write {
                    path: tmp_path,
                    message: format!("failed to set permissions: {}", e),
                });
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(e));
        }

        debug!("Wrote glab config to {}", target.display());
        Ok(())
    }

    fn parse_error(&self, e: impl std::fmt::Display) -> CtxError {
        CtxError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }

    fn write_error(&self, e: impl std::fmt::Display) -> CtxError {
        CtxError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}
