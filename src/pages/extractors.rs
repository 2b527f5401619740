//! Per-kind field extraction
//!
//! One pure function per resource kind, mapping a fetched resource to
//! the ordered rows its detail page shows. Row order is part of the
//! external contract and covered by snapshot tests.
//!
//! Every extractor tolerates an absent resource (query not resolved, or
//! the backend returned nothing) by substituting the kind's default
//! record, so each row still renders with an empty value instead of
//! failing. Adding a kind means: enum variant, record, extractor, one
//! registry entry below. The detail shell never changes.

use super::rows::{DisplayRow, RowValue};
use crate::models::records::{
    Bucket, GitRepository, HelmChart, HelmRelease, HelmRepository, Kustomization, OCIRepository,
};
use crate::models::{ResourceKind, TypedResource};

/// A pure, synchronous, total mapping from a fetched resource to rows.
pub type FieldExtractor = fn(Option<&TypedResource>) -> Vec<DisplayRow>;

pub fn git_repository_detail(resource: Option<&TypedResource>) -> Vec<DisplayRow> {
    let fallback = GitRepository::default();
    let repo = match resource {
        Some(TypedResource::GitRepository(r)) => r,
        _ => &fallback,
    };
    vec![
        DisplayRow::new("URL", RowValue::link(&repo.url)),
        DisplayRow::new(
            "Ref",
            RowValue::text(repo.reference.display().unwrap_or_default()),
        ),
        DisplayRow::new("Last Updated", RowValue::timestamp(repo.last_updated_at)),
        DisplayRow::new("Cluster", RowValue::text(&repo.cluster_name)),
        DisplayRow::new("Namespace", RowValue::text(&repo.namespace)),
    ]
}

pub fn oci_repository_detail(resource: Option<&TypedResource>) -> Vec<DisplayRow> {
    let fallback = OCIRepository::default();
    let repo = match resource {
        Some(TypedResource::OCIRepository(r)) => r,
        _ => &fallback,
    };
    vec![
        DisplayRow::new("URL", RowValue::link(&repo.url)),
        DisplayRow::new(
            "Ref",
            RowValue::text(repo.reference.clone().unwrap_or_default()),
        ),
        DisplayRow::new("Last Updated", RowValue::timestamp(repo.last_updated_at)),
        DisplayRow::new("Interval", RowValue::interval(repo.interval.clone())),
        DisplayRow::new("Cluster", RowValue::text(&repo.cluster_name)),
        DisplayRow::new("Namespace", RowValue::text(&repo.namespace)),
    ]
}

pub fn helm_repository_detail(resource: Option<&TypedResource>) -> Vec<DisplayRow> {
    let fallback = HelmRepository::default();
    let repo = match resource {
        Some(TypedResource::HelmRepository(r)) => r,
        _ => &fallback,
    };
    vec![
        DisplayRow::new("URL", RowValue::link(&repo.url)),
        DisplayRow::new("Last Updated", RowValue::timestamp(repo.last_updated_at)),
        DisplayRow::new("Interval", RowValue::interval(repo.interval.clone())),
        DisplayRow::new("Cluster", RowValue::text(&repo.cluster_name)),
        DisplayRow::new("Namespace", RowValue::text(&repo.namespace)),
    ]
}

pub fn bucket_detail(resource: Option<&TypedResource>) -> Vec<DisplayRow> {
    let fallback = Bucket::default();
    let bucket = match resource {
        Some(TypedResource::Bucket(r)) => r,
        _ => &fallback,
    };
    vec![
        DisplayRow::new("Endpoint", RowValue::text(&bucket.endpoint)),
        DisplayRow::new("Bucket Name", RowValue::text(&bucket.bucket_name)),
        DisplayRow::new("Last Updated", RowValue::timestamp(bucket.last_updated_at)),
        DisplayRow::new("Interval", RowValue::interval(bucket.interval.clone())),
        DisplayRow::new("Cluster", RowValue::text(&bucket.cluster_name)),
        DisplayRow::new("Namespace", RowValue::text(&bucket.namespace)),
    ]
}

pub fn helm_chart_detail(resource: Option<&TypedResource>) -> Vec<DisplayRow> {
    let fallback = HelmChart::default();
    let chart = match resource {
        Some(TypedResource::HelmChart(r)) => r,
        _ => &fallback,
    };
    vec![
        DisplayRow::new("Chart", RowValue::text(&chart.chart)),
        DisplayRow::new(
            "Version",
            RowValue::text(chart.version.clone().unwrap_or_default()),
        ),
        DisplayRow::new(
            "Source",
            RowValue::text(chart.source_ref.clone().unwrap_or_default()),
        ),
        DisplayRow::new("Last Updated", RowValue::timestamp(chart.last_updated_at)),
        DisplayRow::new("Interval", RowValue::interval(chart.interval.clone())),
        DisplayRow::new("Cluster", RowValue::text(&chart.cluster_name)),
        DisplayRow::new("Namespace", RowValue::text(&chart.namespace)),
    ]
}

pub fn kustomization_detail(resource: Option<&TypedResource>) -> Vec<DisplayRow> {
    let fallback = Kustomization::default();
    let ks = match resource {
        Some(TypedResource::Kustomization(r)) => r,
        _ => &fallback,
    };
    vec![
        DisplayRow::new(
            "Source",
            RowValue::text(ks.source_ref.clone().unwrap_or_default()),
        ),
        DisplayRow::new(
            "Applied Revision",
            RowValue::text(ks.applied_revision.clone().unwrap_or_default()),
        ),
        DisplayRow::new("Path", RowValue::text(ks.path.clone().unwrap_or_default())),
        DisplayRow::new("Interval", RowValue::interval(ks.interval.clone())),
        DisplayRow::new("Last Updated", RowValue::timestamp(ks.last_updated_at)),
        DisplayRow::new("Cluster", RowValue::text(&ks.cluster_name)),
        DisplayRow::new("Namespace", RowValue::text(&ks.namespace)),
    ]
}

pub fn helm_release_detail(resource: Option<&TypedResource>) -> Vec<DisplayRow> {
    let fallback = HelmRelease::default();
    let release = match resource {
        Some(TypedResource::HelmRelease(r)) => r,
        _ => &fallback,
    };
    vec![
        DisplayRow::new("Chart", RowValue::text(&release.chart)),
        DisplayRow::new(
            "Version",
            RowValue::text(release.version.clone().unwrap_or_default()),
        ),
        DisplayRow::new("Interval", RowValue::interval(release.interval.clone())),
        DisplayRow::new(
            "Last Updated",
            RowValue::timestamp(release.last_updated_at),
        ),
        DisplayRow::new("Cluster", RowValue::text(&release.cluster_name)),
        DisplayRow::new("Namespace", RowValue::text(&release.namespace)),
    ]
}

/// Registry entry binding a kind to its extractor.
pub struct PageEntry {
    pub kind: ResourceKind,
    pub extractor: FieldExtractor,
}

/// Registry of all detail pages.
///
/// The router and the detail shell look kinds up here; nothing inspects
/// variants at render time.
pub const DETAIL_REGISTRY: &[PageEntry] = &[
    PageEntry {
        kind: ResourceKind::GitRepository,
        extractor: git_repository_detail,
    },
    PageEntry {
        kind: ResourceKind::OCIRepository,
        extractor: oci_repository_detail,
    },
    PageEntry {
        kind: ResourceKind::HelmRepository,
        extractor: helm_repository_detail,
    },
    PageEntry {
        kind: ResourceKind::Bucket,
        extractor: bucket_detail,
    },
    PageEntry {
        kind: ResourceKind::HelmChart,
        extractor: helm_chart_detail,
    },
    PageEntry {
        kind: ResourceKind::Kustomization,
        extractor: kustomization_detail,
    },
    PageEntry {
        kind: ResourceKind::HelmRelease,
        extractor: helm_release_detail,
    },
];

/// Look up the extractor for a kind.
pub fn extractor_for(kind: ResourceKind) -> Option<FieldExtractor> {
    DETAIL_REGISTRY
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.extractor)
}
