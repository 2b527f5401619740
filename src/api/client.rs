//! Kubernetes-backed CoreClient
//!
//! Connects to the cluster the way the flux CLI does (in-cluster config,
//! then KUBECONFIG, then ~/.kube/config) and serves the [`CoreClient`]
//! contract with typed CRD gets and lists.

use super::{ClientError, CoreClient, convert, crd};
use crate::models::{ResourceIdentity, ResourceKind};
use crate::models::records::{
    Automation, Bucket, GitRepository, HelmChart, HelmRelease, HelmRepository, Kustomization,
    OCIRepository, SourceItem,
};
use crate::session::FeatureFlags;
use anyhow::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::api::ListParams;
use kube::{Api, Client, Config, ResourceExt};

/// Initialize a Kubernetes client
///
/// Uses the default kubeconfig loading strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn create_client() -> Result<Client> {
    let config = Config::infer().await?;
    let client = Client::try_from(config)?;
    Ok(client)
}

/// Get the current Kubernetes context name
///
/// Read from the kubeconfig file; falls back to "default" when no
/// current-context is recorded.
pub fn current_context() -> String {
    let kubeconfig_path = std::env::var("KUBECONFIG").ok().or_else(|| {
        let home = std::env::var("HOME").ok()?;
        Some(format!("{}/.kube/config", home))
    });

    if let Some(path) = kubeconfig_path
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        for line in contents.lines() {
            if line.trim().starts_with("current-context:")
                && let Some(context) = line.split(':').nth(1)
            {
                return context.trim().to_string();
            }
        }
    }

    "default".to_string()
}

fn map_get_error(e: kube::Error, kind: ResourceKind, identity: &ResourceIdentity) -> ClientError {
    match e {
        kube::Error::Api(ref ae) if ae.code == 404 => ClientError::NotFound {
            kind: kind.to_string(),
            namespace: identity.namespace.clone(),
            name: identity.name.clone(),
        },
        other => ClientError::Kube(other),
    }
}

/// CoreClient implementation backed by the Kubernetes API.
pub struct KubeCoreClient {
    client: Client,
    cluster_name: String,
}

impl KubeCoreClient {
    pub fn new(client: Client, cluster_name: impl Into<String>) -> Self {
        Self {
            client,
            cluster_name: cluster_name.into(),
        }
    }

    /// Cluster name recorded on returned records. An identity with an
    /// empty cluster means "default", which is this client's cluster.
    fn cluster_for(&self, identity: &ResourceIdentity) -> String {
        if identity.cluster_name.is_empty() {
            self.cluster_name.clone()
        } else {
            identity.cluster_name.clone()
        }
    }

    async fn get<K>(&self, identity: &ResourceIdentity, kind: ResourceKind) -> Result<K, ClientError>
    where
        K: kube::Resource<Scope = kube::core::NamespaceResourceScope>
            + Clone
            + std::fmt::Debug
            + for<'de> serde::Deserialize<'de>,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), &identity.namespace);
        api.get(&identity.name)
            .await
            .map_err(|e| map_get_error(e, kind, identity))
    }

    async fn list<K>(&self, namespace: Option<&str>) -> Result<Vec<K>, ClientError>
    where
        K: kube::Resource<Scope = kube::core::NamespaceResourceScope>
            + Clone
            + std::fmt::Debug
            + for<'de> serde::Deserialize<'de>,
        K::DynamicType: Default,
    {
        let api: Api<K> = match namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items)
    }
}

#[async_trait]
impl CoreClient for KubeCoreClient {
    async fn get_git_repository(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<GitRepository, ClientError> {
        let obj: crd::GitRepository = self.get(identity, ResourceKind::GitRepository).await?;
        Ok(convert::git_repository(&obj, &self.cluster_for(identity)))
    }

    async fn get_oci_repository(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<OCIRepository, ClientError> {
        let obj: crd::OCIRepository = self.get(identity, ResourceKind::OCIRepository).await?;
        Ok(convert::oci_repository(&obj, &self.cluster_for(identity)))
    }

    async fn get_helm_repository(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<HelmRepository, ClientError> {
        let obj: crd::HelmRepository = self.get(identity, ResourceKind::HelmRepository).await?;
        Ok(convert::helm_repository(&obj, &self.cluster_for(identity)))
    }

    async fn get_bucket(&self, identity: &ResourceIdentity) -> Result<Bucket, ClientError> {
        let obj: crd::Bucket = self.get(identity, ResourceKind::Bucket).await?;
        Ok(convert::bucket(&obj, &self.cluster_for(identity)))
    }

    async fn get_helm_chart(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<HelmChart, ClientError> {
        let obj: crd::HelmChart = self.get(identity, ResourceKind::HelmChart).await?;
        Ok(convert::helm_chart(&obj, &self.cluster_for(identity)))
    }

    async fn get_kustomization(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<Kustomization, ClientError> {
        let obj: crd::Kustomization = self.get(identity, ResourceKind::Kustomization).await?;
        Ok(convert::kustomization(&obj, &self.cluster_for(identity)))
    }

    async fn get_helm_release(
        &self,
        identity: &ResourceIdentity,
    ) -> Result<HelmRelease, ClientError> {
        let obj: crd::HelmRelease = self.get(identity, ResourceKind::HelmRelease).await?;
        Ok(convert::helm_release(&obj, &self.cluster_for(identity)))
    }

    async fn list_automations<'a>(
        &self,
        namespace: Option<&'a str>,
    ) -> Result<Vec<Automation>, ClientError> {
        let mut rows = Vec::new();
        let kustomizations: Vec<crd::Kustomization> = self.list(namespace).await?;
        for obj in &kustomizations {
            rows.push(convert::automation_from_kustomization(
                obj,
                &self.cluster_name,
            ));
        }
        let releases: Vec<crd::HelmRelease> = self.list(namespace).await?;
        for obj in &releases {
            rows.push(convert::automation_from_helm_release(obj, &self.cluster_name));
        }
        rows.sort_by(|a, b| (&a.namespace, &a.name).cmp(&(&b.namespace, &b.name)));
        Ok(rows)
    }

    async fn list_sources<'a>(
        &self,
        namespace: Option<&'a str>,
    ) -> Result<Vec<SourceItem>, ClientError> {
        let mut rows = Vec::new();

        let repos: Vec<crd::GitRepository> = self.list(namespace).await?;
        for obj in &repos {
            rows.push(convert::source_item(
                "GitRepository",
                obj.name_any(),
                obj.namespace().unwrap_or_default(),
                &self.cluster_name,
                obj.spec.url.clone(),
                obj.status.as_ref().and_then(|s| s.conditions.as_ref()),
            ));
        }
        let repos: Vec<crd::OCIRepository> = self.list(namespace).await?;
        for obj in &repos {
            rows.push(convert::source_item(
                "OCIRepository",
                obj.name_any(),
                obj.namespace().unwrap_or_default(),
                &self.cluster_name,
                obj.spec.url.clone(),
                obj.status.as_ref().and_then(|s| s.conditions.as_ref()),
            ));
        }
        let repos: Vec<crd::HelmRepository> = self.list(namespace).await?;
        for obj in &repos {
            rows.push(convert::source_item(
                "HelmRepository",
                obj.name_any(),
                obj.namespace().unwrap_or_default(),
                &self.cluster_name,
                obj.spec.url.clone(),
                obj.status.as_ref().and_then(|s| s.conditions.as_ref()),
            ));
        }
        let buckets: Vec<crd::Bucket> = self.list(namespace).await?;
        for obj in &buckets {
            rows.push(convert::source_item(
                "Bucket",
                obj.name_any(),
                obj.namespace().unwrap_or_default(),
                &self.cluster_name,
                obj.spec.endpoint.clone(),
                obj.status.as_ref().and_then(|s| s.conditions.as_ref()),
            ));
        }
        let charts: Vec<crd::HelmChart> = self.list(namespace).await?;
        for obj in &charts {
            rows.push(convert::source_item(
                "HelmChart",
                obj.name_any(),
                obj.namespace().unwrap_or_default(),
                &self.cluster_name,
                obj.spec.chart.clone(),
                obj.status.as_ref().and_then(|s| s.conditions.as_ref()),
            ));
        }

        rows.sort_by(|a, b| {
            (&a.kind, &a.namespace, &a.name).cmp(&(&b.kind, &b.namespace, &b.name))
        });
        Ok(rows)
    }

    async fn list_namespaces(&self) -> Result<Vec<String>, ClientError> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        let mut names: Vec<String> = list.items.iter().map(|ns| ns.name_any()).collect();
        names.sort();
        Ok(names)
    }

    async fn feature_flags(&self) -> Result<FeatureFlags, ClientError> {
        // The Kubernetes backend carries no flag endpoint; everything the
        // dashboard can render is enabled.
        tracing::debug!("serving default feature flags");
        Ok(FeatureFlags::default())
    }
}
