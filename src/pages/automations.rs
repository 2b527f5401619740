//! Automations list page
//!
//! The landing page: every Kustomization and HelmRelease across the
//! cluster, filterable by namespace. Follows the same ownership rules
//! as the detail shell: the page owns its watch channels and fetch
//! tasks, and dropping it aborts anything still in flight.

use crate::api::CoreClient;
use crate::models::records::Automation;
use crate::query::QueryResult;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct AutomationsPage {
    api: Arc<dyn CoreClient>,
    namespace: Option<String>,
    tx: watch::Sender<QueryResult<Vec<Automation>>>,
    rx: watch::Receiver<QueryResult<Vec<Automation>>>,
    namespaces_rx: watch::Receiver<Vec<String>>,
    task: Option<JoinHandle<()>>,
    namespaces_task: JoinHandle<()>,
}

impl AutomationsPage {
    /// Start loading the list and, once per page, the namespace set
    /// backing the filter dropdown.
    pub fn new(api: Arc<dyn CoreClient>, namespace: Option<String>) -> Self {
        let (tx, rx) = watch::channel(QueryResult::loading());
        let (namespaces_tx, namespaces_rx) = watch::channel(Vec::new());

        let namespaces_task = {
            let api = api.clone();
            tokio::spawn(async move {
                match api.list_namespaces().await {
                    Ok(namespaces) => {
                        let _ = namespaces_tx.send(namespaces);
                    }
                    Err(e) => {
                        // The filter degrades to "all namespaces" only.
                        tracing::warn!("failed to list namespaces: {e}");
                    }
                }
            })
        };

        let task = Some(spawn_list(api.clone(), namespace.clone(), tx.clone()));

        Self {
            api,
            namespace,
            tx,
            rx,
            namespaces_rx,
            task,
            namespaces_task,
        }
    }

    pub fn snapshot(&self) -> QueryResult<Vec<Automation>> {
        self.rx.borrow().clone()
    }

    /// Namespaces available to the filter. Empty until loaded.
    pub fn namespaces(&self) -> Vec<String> {
        self.namespaces_rx.borrow().clone()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Change the namespace filter and reload. The previous list stays
    /// on screen while the new one is fetched.
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
    tx: watch::Sender<QueryResult<Vec<Automation>>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = api
            .list_automations(namespace.as_deref())
            .await
            .map_err(Into::into);
        let _ = tx.send(QueryResult::settled(outcome));
    })
}

impl Drop for AutomationsPage {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
        self.namespaces_task.abort();
    }
}
