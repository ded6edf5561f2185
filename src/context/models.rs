//! Context store data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level users file
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UsersConfig {
    /// Map of host key to its named contexts
    #[serde(default)]
    pub hosts: BTreeMap<String, HostEntry>,
}

/// Contexts available for one GitLab host
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostEntry {
    /// Host name as it appears under `hosts` in the glab config
    #[serde(default)]
    pub host: String,
    /// Named contexts, in document order
    #[serde(default)]
    pub contexts: Vec<Context>,
}

/// A named user/token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Context {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub token: String,
}

impl Context {
    /// A context is usable only when name, user and token are all set
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.user.is_empty() && !self.token.is_empty()
    }
}

/// A validated context and the glab host it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContext {
    /// Key under `hosts` in the glab config
    pub host: String,
    pub context: Context,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(name: &str, user: &str, token: &str) -> Context {
        Context {
            name: name.to_string(),
            user: user.to_string(),
            token: token.to_string(),
        }
    }

    #[test]
    fn test_context_valid() {
        assert!(ctx("work", "alice", "t1").is_valid());
    }

    #[test]
    fn test_context_invalid_when_any_field_empty() {
        assert!(!ctx("", "alice", "t1").is_valid());
        assert!(!ctx("work", "", "t1").is_valid());
        assert!(!ctx("work", "alice", "").is_valid());
        assert!(!Context::default().is_valid());
    }

    #[test]
    fn test_deserialize_users_file() {
        let yaml = r#"
hosts:
  gitlab.com:
    host: gitlab.com
    contexts:
      - name: work
        user: alice
        token: t1
      - name: personal
        user: bob
        token: t2
"#;
        let config: UsersConfig = serde_yml::from_str(yaml).unwrap();
        let entry = &config.hosts["gitlab.com"];
        assert_eq!(entry.host, "gitlab.com");
        assert_eq!(entry.contexts.len(), 2);
        assert_eq!(entry.contexts[0], ctx("work", "alice", "t1"));
        assert_eq!(entry.contexts[1], ctx("personal", "bob", "t2"));
    }

    #[test]
    fn test_deserialize_missing_fields_default_empty() {
        let yaml = r#"
hosts:
  gitlab.com:
    contexts:
      - name: work
        user: alice
"#;
        let config: UsersConfig = serde_yml::from_str(yaml).unwrap();
        let entry = &config.hosts["gitlab.com"];
        assert!(entry.host.is_empty());
        assert!(entry.contexts[0].token.is_empty());
        assert!(!entry.contexts[0].is_valid());
    }

    #[test]
    fn test_deserialize_without_hosts() {
        let config: UsersConfig = serde_yml::from_str("{}").unwrap();
        assert!(config.hosts.is_empty());
    }
}
