//! Session gating
//!
//! Authentication and feature flags are collaborators: the pages assume
//! they run only after the gate has passed and receive flag state as
//! plain data. Protocol details (tokens, OIDC, sign-in flows) live
//! outside this crate.

use async_trait::async_trait;
use std::collections::HashMap;

/// Errors from the authentication gate.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("not authenticated: {0}")]
    Unauthenticated(String),
    #[error("auth check failed: {0}")]
    CheckFailed(String),
}

/// The authenticated principal, as far as the dashboard cares.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub id: String,
}

/// Pass/fail authentication contract.
///
/// The TUI calls this exactly once before showing any page; a failure is
/// terminal for the session, not for individual pages.
#[async_trait]
pub trait AuthGate: Send + Sync {
    async fn user_info(&self) -> Result<UserInfo, AuthError>;
}

/// Feature flag state handed to the app at startup.
///
/// Missing flags read as disabled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureFlags {
    flags: HashMap<String, bool>,
}

impl FeatureFlags {
    pub fn new(flags: HashMap<String, bool>) -> Self {
        Self { flags }
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

/// Auth gate backed by the Kubernetes API server.
///
/// Reaching the version endpoint proves the kubeconfig credentials are
/// accepted; the context name stands in for a user id.
pub struct KubeAuthGate {
    client: kube::Client,
    context: String,
}

impl KubeAuthGate {
    pub fn new(client: kube::Client, context: impl Into<String>) -> Self {
        Self {
            client,
            context: context.into(),
        }
    }
}

#[async_trait]
impl AuthGate for KubeAuthGate {
    async fn user_info(&self) -> Result<UserInfo, AuthError> {
        match self.client.apiserver_version().await {
            Ok(version) => {
                tracing::debug!(
                    "authenticated against api server {}",
                    version.git_version
                );
                Ok(UserInfo {
                    id: self.context.clone(),
                })
            }
            Err(kube::Error::Api(ae)) if ae.code == 401 || ae.code == 403 => {
                Err(AuthError::Unauthenticated(ae.message))
            }
            Err(e) => Err(AuthError::CheckFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_read_disabled() {
        let flags = FeatureFlags::default();
        assert!(!flags.is_enabled("CLUSTER_USER_AUTH"));
    }

    #[test]
    fn test_enabled_flag() {
        let mut map = HashMap::new();
        map.insert("OIDC_AUTH".to_string(), true);
        map.insert("METRICS".to_string(), false);
        let flags = FeatureFlags::new(map);
        assert!(flags.is_enabled("OIDC_AUTH"));
        assert!(!flags.is_enabled("METRICS"));
        assert!(!flags.is_enabled("UNKNOWN"));
    }
}
