//! Resource kind definitions
//!
//! This module provides a centralized enum for the resource kinds the
//! dashboard can display. This eliminates hardcoded strings throughout
//! the codebase and provides type safety for kind references.

use std::fmt;
use std::str::FromStr;

/// Enumeration of all dashboard resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    // Source Controller resources
    GitRepository,
    OCIRepository,
    HelmRepository,
    Bucket,
    HelmChart,
    // Kustomize Controller resources
    Kustomization,
    // Helm Controller resources
    HelmRelease,
}

impl ResourceKind {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::GitRepository => "GitRepository",
            ResourceKind::OCIRepository => "OCIRepository",
            ResourceKind::HelmRepository => "HelmRepository",
            ResourceKind::Bucket => "Bucket",
            ResourceKind::HelmChart => "HelmChart",
            ResourceKind::Kustomization => "Kustomization",
            ResourceKind::HelmRelease => "HelmRelease",
        }
    }

    /// Try to parse a string into a ResourceKind, returning None if invalid
    /// Use this when you want Option<Self> instead of Result<Self, String>
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Get all dashboard resource kinds
    ///
    /// Returns an array of all ResourceKind variants.
    /// This is useful for iterating over all resource types dynamically.
    pub fn all() -> &'static [Self] {
        &[
            ResourceKind::GitRepository,
            ResourceKind::OCIRepository,
            ResourceKind::HelmRepository,
            ResourceKind::Bucket,
            ResourceKind::HelmChart,
            ResourceKind::Kustomization,
            ResourceKind::HelmRelease,
        ]
    }

    /// The source kinds (objects produced by the source controller)
    pub fn sources() -> &'static [Self] {
        &[
            ResourceKind::GitRepository,
            ResourceKind::OCIRepository,
            ResourceKind::HelmRepository,
            ResourceKind::Bucket,
            ResourceKind::HelmChart,
        ]
    }

    /// The automation kinds (objects that apply sources to the cluster)
    pub fn automations() -> &'static [Self] {
        &[ResourceKind::Kustomization, ResourceKind::HelmRelease]
    }

    /// Try to parse a string (case-insensitive) into a ResourceKind
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gitrepository" | "gitrepo" | "gitrepositories" => Some(ResourceKind::GitRepository),
            "ocirepository" | "oci" | "ocirepositories" => Some(ResourceKind::OCIRepository),
            "helmrepository" | "helmrepo" | "helmrepositories" => {
                Some(ResourceKind::HelmRepository)
            }
            "bucket" | "buckets" => Some(ResourceKind::Bucket),
            "helmchart" | "helmcharts" => Some(ResourceKind::HelmChart),
            "kustomization" | "ks" | "kustomizations" => Some(ResourceKind::Kustomization),
            "helmrelease" | "hr" | "helmreleases" => Some(ResourceKind::HelmRelease),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GitRepository" => Ok(ResourceKind::GitRepository),
            "OCIRepository" => Ok(ResourceKind::OCIRepository),
            "HelmRepository" => Ok(ResourceKind::HelmRepository),
            "Bucket" => Ok(ResourceKind::Bucket),
            "HelmChart" => Ok(ResourceKind::HelmChart),
            "Kustomization" => Ok(ResourceKind::Kustomization),
            "HelmRelease" => Ok(ResourceKind::HelmRelease),
            _ => Err(format!("Unknown resource kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ResourceKind::GitRepository.as_str(), "GitRepository");
        assert_eq!(ResourceKind::OCIRepository.as_str(), "OCIRepository");
        assert_eq!(ResourceKind::Kustomization.as_str(), "Kustomization");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ResourceKind::parse_optional("GitRepository"),
            Some(ResourceKind::GitRepository)
        );
        assert_eq!(
            ResourceKind::parse_optional("HelmRelease"),
            Some(ResourceKind::HelmRelease)
        );
        assert_eq!(ResourceKind::parse_optional("Unknown"), None);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            ResourceKind::from_str_case_insensitive("gitrepository"),
            Some(ResourceKind::GitRepository)
        );
        assert_eq!(
            ResourceKind::from_str_case_insensitive("GitRepository"),
            Some(ResourceKind::GitRepository)
        );
        assert_eq!(
            ResourceKind::from_str_case_insensitive("ks"),
            Some(ResourceKind::Kustomization)
        );
        assert_eq!(
            ResourceKind::from_str_case_insensitive("oci"),
            Some(ResourceKind::OCIRepository)
        );
    }

    #[test]
    fn test_sources_and_automations_partition_all() {
        let mut combined: Vec<_> = ResourceKind::sources().to_vec();
        combined.extend_from_slice(ResourceKind::automations());
        assert_eq!(combined.len(), ResourceKind::all().len());
        for kind in ResourceKind::all() {
            assert!(combined.contains(kind));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ResourceKind::GitRepository), "GitRepository");
        assert_eq!(format!("{}", ResourceKind::Kustomization), "Kustomization");
    }
}
