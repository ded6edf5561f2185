//! In-memory glab configuration document

use serde_yml::{Mapping, Value};

use crate::config::glab as keys;
use crate::error::{CtxError, Result};

/// A parsed glab config.yml.
///
/// Kept as an untyped, insertion-ordered value tree so that every field this
/// tool does not manage survives a load/save cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct GlabConfig {
    root: Value,
}

impl GlabConfig {
    /// Parse a YAML document. An empty document parses to null.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yml::Error> {
        let root = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yml::from_str(content)?
        };
        Ok(Self { root })
    }

    /// Render the document back to YAML
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yml::Error> {
        serde_yml::to_string(&self.root)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Overwrite `hosts.<host>.user` and `hosts.<host>.token`.
    /// Keys already present keep their position; missing ones are appended.
    pub fn set_host_credentials(&mut self, host: &str, user: &str, token: &str) -> Result<()> {
        let host_config = self.host_mapping_mut(host)?;
        host_config.insert(
            Value::String(keys::USER_KEY.to_string()),
            Value::String(user.to_string()),
        );
        host_config.insert(
            Value::String(keys::TOKEN_KEY.to_string()),
            Value::String(token.to_string()),
        );
        Ok(())
    }

    fn host_mapping_mut(&mut self, host: &str) -> Result<&mut Mapping> {
        let hosts = self
            .root
            .as_mapping_mut()
            .and_then(|root| root.get_mut(keys::HOSTS_KEY))
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| CtxError::MissingKey(keys::HOSTS_KEY.to_string()))?;

        hosts
            .get_mut(host)
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| CtxError::MissingKey(format!("{}.{}", keys::HOSTS_KEY, host)))
    }
}
