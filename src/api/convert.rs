//! CRD object to view record conversion
//!
//! Maps the typed CRD objects coming off the Kubernetes API into the flat
//! records the pages render. Timestamps come from the source artifact
//! where one exists, otherwise from the Ready condition transition.

use super::crd;
use crate::models::records::{
    Automation, Bucket, GitReference, GitRepository, HelmChart, HelmRelease, HelmRepository,
    Kustomization, OCIRepository, SourceItem,
};
use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::ResourceExt;

fn parse_artifact_time(artifact: Option<&crd::Artifact>) -> Option<DateTime<Utc>> {
    artifact
        .and_then(|a| a.last_update_time.as_deref())
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
}

fn ready_condition(conditions: Option<&Vec<Condition>>) -> Option<&Condition> {
    conditions?.iter().find(|c| c.type_ == "Ready")
}

fn ready_status(conditions: Option<&Vec<Condition>>) -> Option<bool> {
    ready_condition(conditions).map(|c| c.status == "True")
}

fn ready_transition_time(conditions: Option<&Vec<Condition>>) -> Option<DateTime<Utc>> {
    ready_condition(conditions).map(|c| c.last_transition_time.0)
}

pub fn git_repository(obj: &crd::GitRepository, cluster_name: &str) -> GitRepository {
    let status = obj.status.as_ref();
    let reference = obj.spec.reference.as_ref();
    GitRepository {
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        url: obj.spec.url.clone(),
        reference: GitReference {
            branch: reference.and_then(|r| r.branch.clone()),
            tag: reference.and_then(|r| r.tag.clone()),
            semver: reference.and_then(|r| r.semver.clone()),
            commit: reference.and_then(|r| r.commit.clone()),
        },
        interval: obj.spec.interval.clone(),
        last_updated_at: parse_artifact_time(status.and_then(|s| s.artifact.as_ref())),
    }
}

pub fn oci_repository(obj: &crd::OCIRepository, cluster_name: &str) -> OCIRepository {
    let status = obj.status.as_ref();
    let reference = obj.spec.reference.as_ref().and_then(|r| {
        r.tag
            .clone()
            .or_else(|| r.semver.clone())
            .or_else(|| r.digest.clone())
    });
    OCIRepository {
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        url: obj.spec.url.clone(),
        reference,
        interval: obj.spec.interval.clone(),
        last_updated_at: parse_artifact_time(status.and_then(|s| s.artifact.as_ref())),
    }
}

pub fn helm_repository(obj: &crd::HelmRepository, cluster_name: &str) -> HelmRepository {
    let status = obj.status.as_ref();
    HelmRepository {
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        url: obj.spec.url.clone(),
        interval: obj.spec.interval.clone(),
        last_updated_at: parse_artifact_time(status.and_then(|s| s.artifact.as_ref())),
    }
}

pub fn bucket(obj: &crd::Bucket, cluster_name: &str) -> Bucket {
    let status = obj.status.as_ref();
    Bucket {
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        endpoint: obj.spec.endpoint.clone(),
        bucket_name: obj.spec.bucket_name.clone(),
        interval: obj.spec.interval.clone(),
        last_updated_at: parse_artifact_time(status.and_then(|s| s.artifact.as_ref())),
    }
}

pub fn helm_chart(obj: &crd::HelmChart, cluster_name: &str) -> HelmChart {
    let status = obj.status.as_ref();
    HelmChart {
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        chart: obj.spec.chart.clone(),
        version: obj.spec.version.clone(),
        source_ref: obj.spec.source_ref.as_ref().map(|s| s.name.clone()),
        interval: obj.spec.interval.clone(),
        last_updated_at: parse_artifact_time(status.and_then(|s| s.artifact.as_ref())),
    }
}

pub fn kustomization(obj: &crd::Kustomization, cluster_name: &str) -> Kustomization {
    let status = obj.status.as_ref();
    Kustomization {
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        source_ref: obj.spec.source_ref.as_ref().map(|s| s.name.clone()),
        applied_revision: status.and_then(|s| s.last_applied_revision.clone()),
        path: obj.spec.path.clone(),
        interval: obj.spec.interval.clone(),
        last_updated_at: ready_transition_time(status.and_then(|s| s.conditions.as_ref())),
    }
}

pub fn helm_release(obj: &crd::HelmRelease, cluster_name: &str) -> HelmRelease {
    let status = obj.status.as_ref();
    let chart_spec = obj.spec.chart.as_ref().and_then(|c| c.spec.as_ref());
    HelmRelease {
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        chart: chart_spec
            .and_then(|s| s.chart.clone())
            .unwrap_or_default(),
        version: chart_spec.and_then(|s| s.version.clone()),
        interval: obj.spec.interval.clone(),
        last_updated_at: ready_transition_time(status.and_then(|s| s.conditions.as_ref())),
    }
}

pub fn automation_from_kustomization(obj: &crd::Kustomization, cluster_name: &str) -> Automation {
    let conditions = obj.status.as_ref().and_then(|s| s.conditions.as_ref());
    Automation {
        kind: "Kustomization".to_string(),
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        ready: ready_status(conditions),
        message: ready_condition(conditions).map(|c| c.message.clone()),
        last_updated_at: ready_transition_time(conditions),
    }
}

pub fn automation_from_helm_release(obj: &crd::HelmRelease, cluster_name: &str) -> Automation {
    let conditions = obj.status.as_ref().and_then(|s| s.conditions.as_ref());
    Automation {
        kind: "HelmRelease".to_string(),
        name: obj.name_any(),
        namespace: obj.namespace().unwrap_or_default(),
        cluster_name: cluster_name.to_string(),
        ready: ready_status(conditions),
        message: ready_condition(conditions).map(|c| c.message.clone()),
        last_updated_at: ready_transition_time(conditions),
    }
}

pub fn source_item(
    kind: &str,
    name: String,
    namespace: String,
    cluster_name: &str,
    url: String,
    conditions: Option<&Vec<Condition>>,
) -> SourceItem {
    SourceItem {
        kind: kind.to_string(),
        name,
        namespace,
        cluster_name: cluster_name.to_string(),
        url,
        ready: ready_status(conditions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

    fn ready(status: &str, time: &str) -> Condition {
        Condition {
            last_transition_time: Time(
                DateTime::parse_from_rfc3339(time)
                    .unwrap()
                    .with_timezone(&Utc),
            ),
            message: "Applied revision: main@sha1:abcd".to_string(),
            observed_generation: None,
            reason: "ReconciliationSucceeded".to_string(),
            status: status.to_string(),
            type_: "Ready".to_string(),
        }
    }

    #[test]
    fn test_git_repository_conversion() {
        let obj = crd::GitRepository::new(
            "flux-system",
            crd::GitRepositorySpec {
                url: "https://github.com/org/repo".to_string(),
                interval: Some("1m".to_string()),
                reference: Some(crd::GitRepositoryRef {
                    branch: Some("main".to_string()),
                    ..Default::default()
                }),
                suspend: None,
            },
        );
        let record = git_repository(&obj, "prod");
        assert_eq!(record.name, "flux-system");
        assert_eq!(record.url, "https://github.com/org/repo");
        assert_eq!(record.reference.branch.as_deref(), Some("main"));
        assert_eq!(record.cluster_name, "prod");
        // No status yet: no timestamp, no fault
        assert!(record.last_updated_at.is_none());
    }

    #[test]
    fn test_artifact_time_parsing() {
        let artifact = crd::Artifact {
            revision: Some("main@sha1:abcd".to_string()),
            last_update_time: Some("2024-01-01T00:00:00Z".to_string()),
            url: None,
        };
        let parsed = parse_artifact_time(Some(&artifact));
        assert_eq!(
            parsed.map(|t| t.to_rfc3339()),
            Some("2024-01-01T00:00:00+00:00".to_string())
        );

        let bad = crd::Artifact {
            last_update_time: Some("not-a-time".to_string()),
            ..Default::default()
        };
        assert!(parse_artifact_time(Some(&bad)).is_none());
    }

    #[test]
    fn test_automation_ready_from_conditions() {
        let mut obj = crd::Kustomization::new(
            "apps",
            crd::KustomizationSpec {
                path: Some("./apps".to_string()),
                ..Default::default()
            },
        );
        obj.status = Some(crd::KustomizationStatus {
            last_applied_revision: Some("main@sha1:abcd".to_string()),
            conditions: Some(vec![ready("True", "2024-01-01T00:00:00Z")]),
        });
        let row = automation_from_kustomization(&obj, "");
        assert_eq!(row.ready, Some(true));
        assert_eq!(row.kind, "Kustomization");
        assert!(row.last_updated_at.is_some());
    }
}
