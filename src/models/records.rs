//! Typed view records
//!
//! One record per resource kind, shaped the way the detail pages consume
//! them. Every record implements `Default` with all fields empty: the
//! extractors substitute that default when a query resolved without data,
//! so row construction never has to null-guard nested fields.

use crate::models::ResourceKind;
use chrono::{DateTime, Utc};

/// Checkout target of a GitRepository.
///
/// Kept as a plain struct (not an Option on the parent) so extractors can
/// always read `reference.branch` without guarding the sub-object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GitReference {
    pub branch: Option<String>,
    pub tag: Option<String>,
    pub semver: Option<String>,
    pub commit: Option<String>,
}

impl GitReference {
    /// The most specific checkout target, for single-value display.
    pub fn display(&self) -> Option<&str> {
        self.branch
            .as_deref()
            .or(self.tag.as_deref())
            .or(self.semver.as_deref())
            .or(self.commit.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GitRepository {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub url: String,
    pub reference: GitReference,
    pub interval: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelmRepository {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub url: String,
    pub interval: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelmChart {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub chart: String,
    pub version: Option<String>,
    pub source_ref: Option<String>,
    pub interval: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelmRelease {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub chart: String,
    pub version: Option<String>,
    pub interval: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub endpoint: String,
    pub bucket_name: String,
    pub interval: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kustomization {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub source_ref: Option<String>,
    pub applied_revision: Option<String>,
    pub path: Option<String>,
    pub interval: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OCIRepository {
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub url: String,
    pub reference: Option<String>,
    pub interval: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

/// A fetched resource, tagged by kind.
///
/// The detail engine moves these around without inspecting the variant;
/// only the per-kind extractors look inside.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedResource {
    GitRepository(GitRepository),
    OCIRepository(OCIRepository),
    HelmRepository(HelmRepository),
    Bucket(Bucket),
    HelmChart(HelmChart),
    Kustomization(Kustomization),
    HelmRelease(HelmRelease),
}

impl TypedResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            TypedResource::GitRepository(_) => ResourceKind::GitRepository,
            TypedResource::OCIRepository(_) => ResourceKind::OCIRepository,
            TypedResource::HelmRepository(_) => ResourceKind::HelmRepository,
            TypedResource::Bucket(_) => ResourceKind::Bucket,
            TypedResource::HelmChart(_) => ResourceKind::HelmChart,
            TypedResource::Kustomization(_) => ResourceKind::Kustomization,
            TypedResource::HelmRelease(_) => ResourceKind::HelmRelease,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypedResource::GitRepository(r) => &r.name,
            TypedResource::OCIRepository(r) => &r.name,
            TypedResource::HelmRepository(r) => &r.name,
            TypedResource::Bucket(r) => &r.name,
            TypedResource::HelmChart(r) => &r.name,
            TypedResource::Kustomization(r) => &r.name,
            TypedResource::HelmRelease(r) => &r.name,
        }
    }
}

/// Row of the automations list page (Kustomizations + HelmReleases).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Automation {
    pub kind: String,
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub ready: Option<bool>,
    pub message: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

/// Row of the sources list page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceItem {
    pub kind: String,
    pub name: String,
    pub namespace: String,
    pub cluster_name: String,
    pub url: String,
    pub ready: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let repo = GitRepository::default();
        assert!(repo.url.is_empty());
        assert!(repo.reference.branch.is_none());
        assert!(repo.last_updated_at.is_none());

        let helm = HelmRepository::default();
        assert!(helm.interval.is_none());
    }

    #[test]
    fn test_git_reference_display_precedence() {
        let mut r = GitReference::default();
        assert_eq!(r.display(), None);
        r.commit = Some("abc123".into());
        assert_eq!(r.display(), Some("abc123"));
        r.tag = Some("v1.0.0".into());
        assert_eq!(r.display(), Some("v1.0.0"));
        r.branch = Some("main".into());
        assert_eq!(r.display(), Some("main"));
    }

    #[test]
    fn test_typed_resource_kind_tag() {
        let r = TypedResource::HelmRelease(HelmRelease::default());
        assert_eq!(r.kind(), ResourceKind::HelmRelease);
        let r = TypedResource::Bucket(Bucket {
            name: "artifacts".into(),
            ..Default::default()
        });
        assert_eq!(r.kind(), ResourceKind::Bucket);
        assert_eq!(r.name(), "artifacts");
    }
}
