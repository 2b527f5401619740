//! Resource identity
//!
//! The (name, namespace, cluster) triple that addresses one instance of a
//! resource kind. Identities are constructed once (from navigation
//! parameters or a list row) and never mutated afterwards.

use crate::models::ResourceKind;
use std::fmt;

/// Uniquely identifies a fetchable resource instance within a kind.
///
/// An empty `cluster_name` means "the default cluster" and is legal;
/// `name` and `namespace` must be non-empty before a fetch is issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdentity {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
}

impl ResourceIdentity {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        cluster_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            cluster_name: cluster_name.into(),
        }
    }

    /// Whether this identity is complete enough to issue a fetch.
    ///
    /// Name and namespace are required; the cluster may be left empty to
    /// mean the default cluster.
    pub fn is_fetchable(&self) -> bool {
        !self.name.is_empty() && !self.namespace.is_empty()
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Cache key for the query layer: one entry per (kind, identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: ResourceKind,
    pub identity: ResourceIdentity,
}

impl QueryKey {
    pub fn new(kind: ResourceKind, identity: ResourceIdentity) -> Self {
        Self { kind, identity }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.kind, self.identity.cluster_name, self.identity.namespace, self.identity.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fetchable() {
        let id = ResourceIdentity::new("flux-system", "flux-system", "");
        assert!(id.is_fetchable());

        let no_name = ResourceIdentity::new("", "flux-system", "");
        assert!(!no_name.is_fetchable());

        let no_namespace = ResourceIdentity::new("flux-system", "", "prod");
        assert!(!no_namespace.is_fetchable());
    }

    #[test]
    fn test_query_key_display() {
        let key = QueryKey::new(
            ResourceKind::GitRepository,
            ResourceIdentity::new("repo", "default", "prod"),
        );
        assert_eq!(key.to_string(), "GitRepository:prod:default:repo");
    }

    #[test]
    fn test_query_key_distinguishes_clusters() {
        let a = QueryKey::new(
            ResourceKind::Bucket,
            ResourceIdentity::new("b", "ns", "east"),
        );
        let b = QueryKey::new(
            ResourceKind::Bucket,
            ResourceIdentity::new("b", "ns", "west"),
        );
        assert_ne!(a, b);
    }
}
