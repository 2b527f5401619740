//! Query client: caching, coalescing, retries
//!
//! One shared client serves every page. Results are cached per
//! (kind, identity) key and served without a network call inside the
//! staleness window; concurrent fetches for the same key share a single
//! in-flight request; failures are retried a fixed number of times
//! before they surface.

use super::QueryError;
use crate::api::CoreClient;
use crate::models::{QueryKey, ResourceIdentity, ResourceKind, TypedResource};
use futures::FutureExt;
use futures::future::Shared;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

type FetchFuture = Shared<Pin<Box<dyn Future<Output = Result<TypedResource, QueryError>> + Send>>>;

struct CacheEntry {
    value: TypedResource,
    fetched_at: Instant,
}

/// Shared query client.
///
/// The staleness window defaults to 30 seconds and the retry count to 1
/// (`query.staleSeconds` / `query.retries` in the config file). Cache
/// writes happen only on request completion and are last-writer-wins per
/// key.
pub struct QueryClient {
    api: Arc<dyn CoreClient>,
    cache: Mutex<HashMap<QueryKey, CacheEntry>>,
    in_flight: Mutex<HashMap<QueryKey, FetchFuture>>,
    stale_after: Duration,
    retries: u32,
    retry_backoff: Duration,
}

impl QueryClient {
    pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(30);
    pub const DEFAULT_RETRIES: u32 = 1;

    pub fn new(api: Arc<dyn CoreClient>, stale_after: Duration, retries: u32) -> Self {
        Self {
            api,
            cache: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
            stale_after,
            retries,
            retry_backoff: Duration::from_millis(200),
        }
    }

    pub fn with_defaults(api: Arc<dyn CoreClient>) -> Self {
        Self::new(api, Self::DEFAULT_STALE_AFTER, Self::DEFAULT_RETRIES)
    }

    /// Last successful result for a key, fresh or not.
    pub fn cached(&self, kind: ResourceKind, identity: &ResourceIdentity) -> Option<TypedResource> {
        let key = QueryKey::new(kind, identity.clone());
        let cache = self.cache.lock().unwrap();
        cache.get(&key).map(|entry| entry.value.clone())
    }

    /// Fetch a resource, serving the cache inside the staleness window.
    pub async fn fetch(
        &self,
        kind: ResourceKind,
        identity: &ResourceIdentity,
    ) -> Result<TypedResource, QueryError> {
        self.fetch_inner(kind, identity, false).await
    }

    /// Fetch a resource, bypassing the staleness window. Used for
    /// explicit background refreshes.
    pub async fn refetch(
        &self,
        kind: ResourceKind,
        identity: &ResourceIdentity,
    ) -> Result<TypedResource, QueryError> {
        self.fetch_inner(kind, identity, true).await
    }

    async fn fetch_inner(
        &self,
        kind: ResourceKind,
        identity: &ResourceIdentity,
        bypass_cache: bool,
    ) -> Result<TypedResource, QueryError> {
        if !identity.is_fetchable() {
            return Err(QueryError::IdentityNotReady);
        }

        let key = QueryKey::new(kind, identity.clone());

        if !bypass_cache {
            let cache = self.cache.lock().unwrap();
            if let Some(entry) = cache.get(&key)
                && entry.fetched_at.elapsed() < self.stale_after
            {
                tracing::trace!("cache hit for {}", key);
                return Ok(entry.value.clone());
            }
        }

        // Coalesce: a second caller for the same key while a request is
        // outstanding shares the same future instead of issuing another
        // network call.
        let fut = {
            let mut in_flight = self.in_flight.lock().unwrap();
            if let Some(existing) = in_flight.get(&key) {
                existing.clone()
            } else {
                let fut = Self::request_with_retries(
                    self.api.clone(),
                    kind,
                    identity.clone(),
                    self.retries,
                    self.retry_backoff,
                )
                .boxed()
                .shared();
                in_flight.insert(key.clone(), fut.clone());
                fut
            }
        };

        let result = fut.clone().await;

        // Every coalesced caller runs this; ptr_eq keeps a slow awaiter
        // from evicting a newer request for the same key.
        {
            let mut in_flight = self.in_flight.lock().unwrap();
            if in_flight.get(&key).is_some_and(|f| Shared::ptr_eq(f, &fut)) {
                in_flight.remove(&key);
            }
        }

        if let Ok(ref value) = result {
            let mut cache = self.cache.lock().unwrap();
            cache.insert(
                key,
                CacheEntry {
                    value: value.clone(),
                    fetched_at: Instant::now(),
                },
            );
        }

        result
    }

    async fn request_with_retries(
        api: Arc<dyn CoreClient>,
        kind: ResourceKind,
        identity: ResourceIdentity,
        retries: u32,
        backoff: Duration,
    ) -> Result<TypedResource, QueryError> {
        let mut attempt = 0;
        loop {
            match Self::request(api.as_ref(), kind, &identity).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < retries => {
                    attempt += 1;
                    tracing::debug!("fetch {} {} failed ({}), retry {}", kind, identity, e, attempt);
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => {
                    tracing::warn!("fetch {} {} failed: {}", kind, identity, e);
                    return Err(e);
                }
            }
        }
    }

    async fn request(
        api: &dyn CoreClient,
        kind: ResourceKind,
        identity: &ResourceIdentity,
    ) -> Result<TypedResource, QueryError> {
        let resource = match kind {
            ResourceKind::GitRepository => {
                TypedResource::GitRepository(api.get_git_repository(identity).await?)
            }
            ResourceKind::OCIRepository => {
                TypedResource::OCIRepository(api.get_oci_repository(identity).await?)
            }
            ResourceKind::HelmRepository => {
                TypedResource::HelmRepository(api.get_helm_repository(identity).await?)
            }
            ResourceKind::Bucket => TypedResource::Bucket(api.get_bucket(identity).await?),
            ResourceKind::HelmChart => {
                TypedResource::HelmChart(api.get_helm_chart(identity).await?)
            }
            ResourceKind::Kustomization => {
                TypedResource::Kustomization(api.get_kustomization(identity).await?)
            }
            ResourceKind::HelmRelease => {
                TypedResource::HelmRelease(api.get_helm_release(identity).await?)
            }
        };
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ClientError, MockCoreClient};
    use crate::models::records::GitRepository;

    fn repo(name: &str) -> GitRepository {
        GitRepository {
            name: name.to_string(),
            namespace: "flux-system".to_string(),
            url: "https://github.com/org/repo".to_string(),
            ..Default::default()
        }
    }

    fn identity() -> ResourceIdentity {
        ResourceIdentity::new("flux-system", "flux-system", "")
    }

    #[tokio::test]
    async fn test_fetch_resolves_data() {
        let mut api = MockCoreClient::new();
        api.expect_get_git_repository()
            .times(1)
            .returning(|id| Ok(repo(&id.name)));

        let client = QueryClient::with_defaults(Arc::new(api));
        let result = client
            .fetch(ResourceKind::GitRepository, &identity())
            .await
            .unwrap();
        assert_eq!(result.kind(), ResourceKind::GitRepository);
        assert_eq!(result.name(), "flux-system");
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_network() {
        let mut api = MockCoreClient::new();
        // Two fetches inside the window, one client call.
        api.expect_get_git_repository()
            .times(1)
            .returning(|id| Ok(repo(&id.name)));

        let client = QueryClient::with_defaults(Arc::new(api));
        let first = client
            .fetch(ResourceKind::GitRepository, &identity())
            .await
            .unwrap();
        let second = client
            .fetch(ResourceKind::GitRepository, &identity())
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_refetch_bypasses_window() {
        let mut api = MockCoreClient::new();
        api.expect_get_git_repository()
            .times(2)
            .returning(|id| Ok(repo(&id.name)));

        let client = QueryClient::with_defaults(Arc::new(api));
        client
            .fetch(ResourceKind::GitRepository, &identity())
            .await
            .unwrap();
        client
            .refetch(ResourceKind::GitRepository, &identity())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_error_after_retries() {
        let mut api = MockCoreClient::new();
        // 1 retry configured: the failing call is issued twice.
        api.expect_get_bucket()
            .times(2)
            .returning(|_| Err(ClientError::Other("connection refused".to_string())));

        let client = QueryClient::new(Arc::new(api), Duration::from_secs(30), 1);
        let err = client
            .fetch(ResourceKind::Bucket, &identity())
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::Api(_)));
    }

    #[tokio::test]
    async fn test_unfetchable_identity_is_rejected_without_network() {
        let api = MockCoreClient::new(); // any call would panic the mock
        let client = QueryClient::with_defaults(Arc::new(api));
        let unnamed = ResourceIdentity::new("", "flux-system", "");
        let err = client
            .fetch(ResourceKind::GitRepository, &unnamed)
            .await
            .unwrap_err();
        assert_eq!(err, QueryError::IdentityNotReady);
    }

    #[tokio::test]
    async fn test_stale_cache_is_refetched() {
        let mut api = MockCoreClient::new();
        api.expect_get_git_repository()
            .times(2)
            .returning(|id| Ok(repo(&id.name)));

        let client = QueryClient::new(Arc::new(api), Duration::from_millis(10), 0);
        client
            .fetch(ResourceKind::GitRepository, &identity())
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        client
            .fetch(ResourceKind::GitRepository, &identity())
            .await
            .unwrap();
    }
}
