//! Context switch command

use log::{debug, info};

use crate::error::{CtxError, Result};
use crate::glab::GlabConfigFile;
use crate::paths::ConfigPaths;

use super::resolve::resolve_context;
use super::store::ContextStore;

/// Result of a successful switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The glab config was rewritten
    Written { host: String, user: String },
    /// Rendered glab config that would have been written
    DryRun(String),
}

/// Copy the named context's user and token into the glab config.
///
/// With `dry_run` the patched document is returned and the glab config on
/// disk is left untouched.
pub fn run_switch(
    paths: &ConfigPaths,
    host_key: &str,
    context_name: &str,
    dry_run: bool,
) -> Result<SwitchOutcome> {
    paths.ensure_parent_dirs()?;

    let store = ContextStore::with_path(paths.users_file.clone());
    let users = store.load()?;
    let resolved = resolve_context(&users, host_key, context_name)?;

    let glab_file = GlabConfigFile::with_path(paths.glab_config.clone());
    let mut glab_config = glab_file.load()?;
    glab_config.set_host_credentials(
        &resolved.host,
        &resolved.context.user,
        &resolved.context.token,
    )?;

    if dry_run {
        let yaml = glab_config.to_yaml().map_err(|e| CtxError::Write {
            path: paths.glab_config.clone(),
            message: e.to_string(),
        })?;
        debug!("Dry run, not writing {}", glab_file.path().display());
        return Ok(SwitchOutcome::DryRun(yaml));
    }

    glab_file.save(&glab_config)?;
    info!(
        "Switched {} to context '{}' (user={}, token={})",
        resolved.host,
        context_name,
        resolved.context.user,
        mask_token(&resolved.context.token)
    );
    Ok(SwitchOutcome::Written {
        host: resolved.host,
        user: resolved.context.user,
    })
}

/// Mask a token for display, keeping the last 4 chars
fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count >= 4 {
        let tail: String = token.chars().skip(count - 4).collect();
        format!("****{}", tail)
    } else {
        "****".to_string()
    }
}
