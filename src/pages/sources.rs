//! Sources list page
//!
//! All Flux source objects (git, OCI and Helm repositories, buckets,
//! charts) in one flat list, filterable by namespace. Selecting a row
//! navigates to that kind's detail route.

use crate::api::CoreClient;
use crate::models::records::SourceItem;
use crate::query::QueryResult;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct SourcesPage {
    api: Arc<dyn CoreClient>,
    namespace: Option<String>,
    tx: watch::Sender<QueryResult<Vec<SourceItem>>>,
    rx: watch::Receiver<QueryResult<Vec<SourceItem>>>,
    task: Option<JoinHandle<()>>,
}

impl SourcesPage {
    pub fn new(api: Arc<dyn CoreClient>, namespace: Option<String>) -> Self {
        let (tx, rx) = watch::channel(QueryResult::loading());
        let task = Some(spawn_list(api.clone(), namespace.clone(), tx.clone()));
        Self {
            api,
            namespace,
            tx,
            rx,
            task,
        }
    }

    pub fn snapshot(&self) -> QueryResult<Vec<SourceItem>> {
        self.rx.borrow().clone()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn set_namespace(&mut self, namespace: Option<String>) {
        if self.namespace == namespace {
            return;
        }
        self.namespace = namespace;
        self.reload();
    }

    pub fn refresh(&mut self) {
        if self.snapshot().is_fetching {
            return;
        }
        self.reload();
    }

    fn reload(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
        self.tx.send_replace(self.snapshot().refetching());
        self.task = Some(spawn_list(
            self.api.clone(),
            self.namespace.clone(),
            self.tx.clone(),
        ));
    }
}

fn spawn_list(
    api: Arc<dyn CoreClient>,
    namespace: Option<String>,
    tx: watch::Sender<QueryResult<Vec<SourceItem>>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = api
            .list_sources(namespace.as_deref())
            .await
            .map_err(Into::into);
        let _ = tx.send(QueryResult::settled(outcome));
    })
}

impl Drop for SourcesPage {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
