//! Detail page shell
//!
//! The generic, kind-agnostic container behind every detail page. It
//! owns one resource identity for its lifetime, drives the query layer,
//! and exposes a three-state view (loading / error / loaded) plus a
//! "refreshing" overlay for background refetches.
//!
//! Each shell instance owns its own watch channel and fetch task; a new
//! identity means a new instance. Dropping the shell aborts the task,
//! so a late response for a superseded identity can never surface in a
//! shell now bound to a different one.

use super::extractors::FieldExtractor;
use super::rows::DisplayRow;
use crate::models::{ResourceIdentity, ResourceKind, TypedResource};
use crate::query::{QueryClient, QueryError, QueryResult};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observable render state of a detail page.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Error(QueryError),
    Loaded {
        rows: Vec<DisplayRow>,
        refreshing: bool,
    },
}

pub struct DetailPage {
    kind: ResourceKind,
    identity: ResourceIdentity,
    extractor: FieldExtractor,
    queries: Arc<QueryClient>,
    tx: watch::Sender<QueryResult<TypedResource>>,
    rx: watch::Receiver<QueryResult<TypedResource>>,
    task: Option<JoinHandle<()>>,
}

impl DetailPage {
    /// Bind a shell to one identity and start the fetch.
    ///
    /// An identity without a resolvable name stays in the pre-fetch
    /// state: the page shows as loading but no request is issued until
    /// a new shell is constructed with a complete identity.
    pub fn new(
        queries: Arc<QueryClient>,
        kind: ResourceKind,
        identity: ResourceIdentity,
        extractor: FieldExtractor,
    ) -> Self {
        let fetchable = identity.is_fetchable();
        let initial = if fetchable {
            QueryResult::loading()
        } else {
            QueryResult::pending()
        };
        let (tx, rx) = watch::channel(initial);

        let task = if fetchable {
            let queries = queries.clone();
            let identity = identity.clone();
            let tx = tx.clone();
            Some(tokio::spawn(async move {
                let outcome = queries.fetch(kind, &identity).await;
                // Send fails only if the shell was dropped; the result
                // is discarded in that case, which is exactly the
                // cancellation contract.
                let _ = tx.send(QueryResult::settled(outcome));
            }))
        } else {
            tracing::debug!("{} detail page has unresolved identity, fetch withheld", kind);
            None
        };

        Self {
            kind,
            identity,
            extractor,
            queries,
            tx,
            rx,
            task,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn identity(&self) -> &ResourceIdentity {
        &self.identity
    }

    /// Page title: the resource name.
    pub fn title(&self) -> &str {
        &self.identity.name
    }

    /// Current query snapshot.
    pub fn snapshot(&self) -> QueryResult<TypedResource> {
        self.rx.borrow().clone()
    }

    /// Derive the render state. The extractor runs only once the query
    /// has settled without error; it receives `None` when the backend
    /// returned nothing and renders empty rows.
    pub fn state(&self) -> DetailState {
        let snapshot = self.snapshot();
        if snapshot.is_loading {
            return DetailState::Loading;
        }
        if let Some(error) = snapshot.error {
            return DetailState::Error(error);
        }
        DetailState::Loaded {
            rows: (self.extractor)(snapshot.data.as_ref()),
            refreshing: snapshot.is_fetching,
        }
    }

    /// Background refresh.
    ///
    /// Keeps the currently rendered content on screen with the
    /// refreshing flag raised, then settles on the fresh outcome.
    /// A shell that is still loading (or never fetched) is left alone;
    /// the state machine never re-enters Loading from Loaded.
    pub fn refresh(&mut self) {
        let current = self.snapshot();
        if current.is_loading || current.is_fetching {
            return;
        }
        self.tx.send_replace(current.refetching());

        let queries = self.queries.clone();
        let kind = self.kind;
        let identity = self.identity.clone();
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let outcome = queries.refetch(kind, &identity).await;
            let _ = tx.send(QueryResult::settled(outcome));
        }));
    }
}

impl Drop for DetailPage {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
