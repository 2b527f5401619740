//! fluxdash library
//!
//! Core functionality for the fluxdash terminal dashboard: the typed
//! resource model, the Kubernetes-backed API client, the caching query
//! layer and the page machinery. The binary wires these together; tests
//! use them directly.

pub mod api;
pub mod config;
pub mod logging;
pub mod models;
pub mod pages;
pub mod query;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types for convenience
pub use models::{QueryKey, ResourceIdentity, ResourceKind, TypedResource};
pub use pages::{DetailPage, DetailState, Route, DETAIL_REGISTRY};
pub use query::{QueryClient, QueryError, QueryResult};
