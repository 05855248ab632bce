//! Default identity used when operations are invoked without explicit
//! ownership attributes.
//!
//! The provider is injected into `FilerClient` rather than read from
//! ambient process state at call sites, so convenience operations stay
//! deterministic under test.

/// Supplies the owner name and group list applied by the convenience forms
/// of `mkdirs` and `touch`.
pub trait IdentityProvider: Send + Sync {
    fn user_name(&self) -> String;

    fn group_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Reads the current OS user from the environment (`USER`, then
/// `USERNAME`), falling back to `"root"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessIdentity;

impl IdentityProvider for ProcessIdentity {
    fn user_name(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "root".to_string())
    }
}

/// Fixed identity, mainly for tests and for embedding applications that
/// manage users themselves.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    pub user_name: String,
    pub group_names: Vec<String>,
}

impl StaticIdentity {
    pub fn new(user_name: &str, group_names: &[&str]) -> Self {
        Self {
            user_name: user_name.to_string(),
            group_names: group_names.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn user_name(&self) -> String {
        self.user_name.clone()
    }

    fn group_names(&self) -> Vec<String> {
        self.group_names.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_identity() {
        let id = StaticIdentity::new("alice", &["staff", "dev"]);
        assert_eq!(id.user_name(), "alice");
        assert_eq!(id.group_names(), vec!["staff", "dev"]);
    }

    #[test]
    fn test_process_identity_never_empty() {
        // Whatever the environment, a usable name comes back.
        assert!(!ProcessIdentity.user_name().is_empty());
        assert!(ProcessIdentity.group_names().is_empty());
    }
}
