//! Context resolution against the users file

use log::debug;

use crate::error::{CtxError, Result};

use super::models::{ResolvedContext, UsersConfig};

/// Find the named context for a host key.
///
/// The first context whose name matches wins. The returned host is the
/// entry's `host` field, falling back to `host_key` when that field is empty.
pub fn resolve_context(
    config: &UsersConfig,
    host_key: &str,
    context_name: &str,
) -> Result<ResolvedContext> {
    let entry = config
        .hosts
        .get(host_key)
        .ok_or_else(|| CtxError::HostNotFound(host_key.to_string()))?;

    let context = entry
        .contexts
        .iter()
        .find(|ctx| ctx.name == context_name)
        .cloned()
        .unwrap_or_default();

    if !context.is_valid() {
        return Err(CtxError::InvalidContext {
            host: host_key.to_string(),
            name: context_name.to_string(),
        });
    }

    let host = if entry.host.is_empty() {
        host_key.to_string()
    } else {
        entry.host.clone()
    };
    if host != host_key {
        debug!("Host key '{}' addresses glab host '{}'", host_key, host);
    }

    debug!(
        "Resolved context '{}' for host '{}': user={}",
        context_name, host, context.user
    );
    Ok(ResolvedContext { host, context })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::models::{Context, HostEntry};

    fn ctx(name: &str, user: &str, token: &str) -> Context {
        Context {
            name: name.to_string(),
            user: user.to_string(),
            token: token.to_string(),
        }
    }

    fn config_with(host_key: &str, host: &str, contexts: Vec<Context>) -> UsersConfig {
        let mut config = UsersConfig::default();
        config.hosts.insert(
            host_key.to_string(),
            HostEntry {
                host: host.to_string(),
                contexts,
            },
        );
        config
    }

    fn scenario_a() -> UsersConfig {
        config_with(
            "gitlab.com",
            "gitlab.com",
            vec![ctx("work", "alice", "t1"), ctx("personal", "bob", "t2")],
        )
    }

    #[test]
    fn test_resolve_named_context() {
        let resolved = resolve_context(&scenario_a(), "gitlab.com", "personal").unwrap();
        assert_eq!(resolved.host, "gitlab.com");
        assert_eq!(resolved.context, ctx("personal", "bob", "t2"));
    }

    #[test]
    fn test_resolve_unknown_host() {
        let result = resolve_context(&scenario_a(), "gitlab.example.com", "work");
        match result {
            Err(CtxError::HostNotFound(host)) => assert_eq!(host, "gitlab.example.com"),
            other => panic!("Expected HostNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_name_is_invalid() {
        let result = resolve_context(&scenario_a(), "gitlab.com", "missing");
        assert!(matches!(result, Err(CtxError::InvalidContext { .. })));
    }

    #[test]
    fn test_resolve_incomplete_context_is_invalid() {
        let config = config_with("gitlab.com", "gitlab.com", vec![ctx("work", "alice", "")]);
        assert!(matches!(
            resolve_context(&config, "gitlab.com", "work"),
            Err(CtxError::InvalidContext { .. })
        ));

        let config = config_with("gitlab.com", "gitlab.com", vec![ctx("work", "", "t1")]);
        assert!(matches!(
            resolve_context(&config, "gitlab.com", "work"),
            Err(CtxError::InvalidContext { .. })
        ));
    }

    #[test]
    fn test_resolve_empty_name_is_invalid() {
        let config = config_with("gitlab.com", "gitlab.com", vec![ctx("", "alice", "t1")]);
        assert!(matches!(
            resolve_context(&config, "gitlab.com", ""),
            Err(CtxError::InvalidContext { .. })
        ));
    }

    #[test]
    fn test_first_match_wins() {
        let config = config_with(
            "gitlab.com",
            "gitlab.com",
            vec![ctx("work", "alice", "t1"), ctx("work", "carol", "t3")],
        );
        let resolved = resolve_context(&config, "gitlab.com", "work").unwrap();
        assert_eq!(resolved.context.user, "alice");
    }

    #[test]
    fn test_invalid_first_match_is_not_skipped() {
        let config = config_with(
            "gitlab.com",
            "gitlab.com",
            vec![ctx("work", "alice", ""), ctx("work", "carol", "t3")],
        );
        assert!(matches!(
            resolve_context(&config, "gitlab.com", "work"),
            Err(CtxError::InvalidContext { .. })
        ));
    }

    #[test]
    fn test_surrounding_entries_do_not_change_result() {
        let target = ctx("personal", "bob", "t2");
        let expected = resolve_context(
            &config_with("gitlab.com", "gitlab.com", vec![target.clone()]),
            "gitlab.com",
            "personal",
        )
        .unwrap();

        for padding in 0..4 {
            let mut contexts: Vec<Context> = (0..padding)
                .map(|i| ctx(&format!("before-{}", i), "x", "y"))
                .collect();
            contexts.push(target.clone());
            contexts.extend((0..padding).map(|i| ctx(&format!("after-{}", i), "x", "y")));

            let config = config_with("gitlab.com", "gitlab.com", contexts);
            let resolved = resolve_context(&config, "gitlab.com", "personal").unwrap();
            assert_eq!(resolved, expected);
        }
    }

    #[test]
    fn test_inner_host_addresses_glab_config() {
        let config = config_with("work", "gitlab.corp.com", vec![ctx("me", "alice", "t1")]);
        let resolved = resolve_context(&config, "work", "me").unwrap();
        assert_eq!(resolved.host, "gitlab.corp.com");
    }

    #[test]
    fn test_empty_inner_host_falls_back_to_key() {
        let config = config_with("gitlab.com", "", vec![ctx("me", "alice", "t1")]);
        let resolved = resolve_context(&config, "gitlab.com", "me").unwrap();
        assert_eq!(resolved.host, "gitlab.com");
    }
}
