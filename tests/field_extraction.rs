//! Field extraction tests
//!
//! Pins the detail-page row contract per resource kind: labels, order,
//! and the rendered values, including the undefined-resource case where
//! every row still appears with an empty value.

use chrono::{DateTime, Utc};
use fluxdash::models::records::{
    Bucket, GitReference, GitRepository, HelmChart, HelmRelease, HelmRepository, Kustomization,
    OCIRepository,
};
use fluxdash::models::TypedResource;
use fluxdash::pages::extractors;
use fluxdash::pages::DisplayRow;
use insta::assert_snapshot;

fn ts(s: &str) -> Option<DateTime<Utc>> {
    Some(
        DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Utc),
    )
}

fn rendered(rows: &[DisplayRow]) -> String {
    rows.iter()
        .map(|row| format!("{}: {}", row.label, row.value.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn labels(rows: &[DisplayRow]) -> Vec<&'static str> {
    rows.iter().map(|row| row.label).collect()
}

fn sample_git_repository() -> TypedResource {
    TypedResource::GitRepository(GitRepository {
        name: "flux-system".to_string(),
        namespace: "flux-system".to_string(),
        cluster_name: "prod".to_string(),
        url: "https://github.com/org/repo".to_string(),
        reference: GitReference {
            branch: Some("main".to_string()),
            ..Default::default()
        },
        interval: Some("1m".to_string()),
        last_updated_at: ts("2024-03-01T12:30:00Z"),
    })
}

#[test]
fn test_git_repository_rows() {
    let rows = extractors::git_repository_detail(Some(&sample_git_repository()));
    assert_snapshot!(rendered(&rows), @r"
    URL: https://github.com/org/repo
    Ref: main
    Last Updated: 2024-03-01 12:30:00 UTC
    Cluster: prod
    Namespace: flux-system
    ");
}

#[test]
fn test_git_repository_ref_precedence() {
    let repo = GitRepository {
        reference: GitReference {
            tag: Some("v1.2.3".to_string()),
            commit: Some("abc123".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let rows = extractors::git_repository_detail(Some(&TypedResource::GitRepository(repo)));
    assert_eq!(rows[1].label, "Ref");
    assert_eq!(rows[1].value.render(), "v1.2.3");
}

#[test]
fn test_helm_repository_undefined_resource_keeps_all_rows() {
    let rows = extractors::helm_repository_detail(None);
    assert_eq!(
        labels(&rows),
        vec!["URL", "Last Updated", "Interval", "Cluster", "Namespace"]
    );
    for row in &rows {
        assert!(
            row.value.is_empty(),
            "row {} should render empty for an undefined resource",
            row.label
        );
    }
}

#[test]
fn test_helm_repository_rows() {
    let repo = HelmRepository {
        name: "bitnami".to_string(),
        namespace: "default".to_string(),
        cluster_name: "prod".to_string(),
        url: "https://charts.bitnami.com/bitnami".to_string(),
        interval: Some("10m".to_string()),
        last_updated_at: ts("2024-03-02T08:00:00Z"),
    };
    let rows = extractors::helm_repository_detail(Some(&TypedResource::HelmRepository(repo)));
    assert_snapshot!(rendered(&rows), @r"
    URL: https://charts.bitnami.com/bitnami
    Last Updated: 2024-03-02 08:00:00 UTC
    Interval: 10 minutes
    Cluster: prod
    Namespace: default
    ");
}

#[test]
fn test_kustomization_rows() {
    let ks = Kustomization {
        name: "apps".to_string(),
        namespace: "flux-system".to_string(),
        cluster_name: "prod".to_string(),
        source_ref: Some("GitRepository/flux-system".to_string()),
        applied_revision: Some("main@sha1:49f3a9".to_string()),
        path: Some("./clusters/prod".to_string()),
        interval: Some("1m30s".to_string()),
        last_updated_at: ts("2024-03-01T12:30:00Z"),
    };
    let rows = extractors::kustomization_detail(Some(&TypedResource::Kustomization(ks)));
    assert_snapshot!(rendered(&rows), @r"
    Source: GitRepository/flux-system
    Applied Revision: main@sha1:49f3a9
    Path: ./clusters/prod
    Interval: 1 minute 30 seconds
    Last Updated: 2024-03-01 12:30:00 UTC
    Cluster: prod
    Namespace: flux-system
    ");
}

#[test]
fn test_bucket_rows() {
    let bucket = Bucket {
        name: "artifacts".to_string(),
        namespace: "default".to_string(),
        cluster_name: "prod".to_string(),
        endpoint: "minio.example.com".to_string(),
        bucket_name: "releases".to_string(),
        interval: Some("5m".to_string()),
        last_updated_at: None,
    };
    let rows = extractors::bucket_detail(Some(&TypedResource::Bucket(bucket)));
    assert_eq!(
        labels(&rows),
        vec![
            "Endpoint",
            "Bucket Name",
            "Last Updated",
            "Interval",
            "Cluster",
            "Namespace"
        ]
    );
    assert_eq!(rows[0].value.render(), "minio.example.com");
    assert_eq!(rows[1].value.render(), "releases");
    // Missing timestamp renders empty, the row stays
    assert_eq!(rows[2].value.render(), "");
}

#[test]
fn test_mismatched_variant_falls_back_to_defaults() {
    // A HelmRelease handed to the git repository extractor renders the
    // same as no resource at all.
    let wrong = TypedResource::HelmRelease(HelmRelease {
        name: "podinfo".to_string(),
        ..Default::default()
    });
    let from_wrong = extractors::git_repository_detail(Some(&wrong));
    let from_none = extractors::git_repository_detail(None);
    assert_eq!(from_wrong, from_none);
}

#[test]
fn test_label_parity_between_empty_and_populated() {
    // Every kind shows the same labels whether or not the resource
    // resolved, so pages never jump around.
    let cases: Vec<(extractors::FieldExtractor, TypedResource)> = vec![
        (extractors::git_repository_detail, sample_git_repository()),
        (
            extractors::oci_repository_detail,
            TypedResource::OCIRepository(OCIRepository {
                url: "oci://ghcr.io/org/repo".to_string(),
                ..Default::default()
            }),
        ),
        (
            extractors::helm_repository_detail,
            TypedResource::HelmRepository(HelmRepository::default()),
        ),
        (
            extractors::bucket_detail,
            TypedResource::Bucket(Bucket::default()),
        ),
        (
            extractors::helm_chart_detail,
            TypedResource::HelmChart(HelmChart {
                chart: "podinfo".to_string(),
                version: Some("6.0.0".to_string()),
                ..Default::default()
            }),
        ),
        (
            extractors::kustomization_detail,
            TypedResource::Kustomization(Kustomization::default()),
        ),
        (
            extractors::helm_release_detail,
            TypedResource::HelmRelease(HelmRelease::default()),
        ),
    ];

    for (extract, resource) in cases {
        assert_eq!(
            labels(&extract(None)),
            labels(&extract(Some(&resource))),
            "labels diverge for {}",
            resource.kind()
        );
    }
}

#[test]
fn test_extraction_is_pure() {
    let resource = sample_git_repository();
    let first = extractors::git_repository_detail(Some(&resource));
    let second = extractors::git_repository_detail(Some(&resource));
    assert_eq!(first, second);
}
