//! Resource query layer
//!
//! Wraps the backend client behind a uniform asynchronous query contract:
//! every page observes a [`QueryResult`] and nothing else. Caching,
//! request coalescing and retries live in [`client::QueryClient`].

pub mod client;

pub use client::QueryClient;

use crate::api::ClientError;

/// Errors surfaced through `QueryResult::error`.
///
/// Cloneable so one failed fetch can be shared by every coalesced caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// The identity is missing its name or namespace; no fetch was issued.
    #[error("identity is not resolvable yet")]
    IdentityNotReady,
    /// The backend call failed after retries.
    #[error("{0}")]
    Api(String),
}

impl From<ClientError> for QueryError {
    fn from(e: ClientError) -> Self {
        QueryError::Api(e.to_string())
    }
}

/// Snapshot of one query's lifecycle.
///
/// Starts loading, then transitions exactly once to either data or
/// error; `is_fetching` toggles independently on background refetches
/// without resetting `data`. `data` and `error` are never both set.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    pub data: Option<T>,
    pub error: Option<QueryError>,
    pub is_loading: bool,
    pub is_fetching: bool,
}

impl<T> QueryResult<T> {
    /// Initial state with a fetch in flight.
    pub fn loading() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: true,
            is_fetching: true,
        }
    }

    /// Pre-fetch state: the identity is not resolvable, nothing is in
    /// flight.
    pub fn pending() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: true,
            is_fetching: false,
        }
    }

    pub fn loaded(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            is_loading: false,
            is_fetching: false,
        }
    }

    pub fn failed(error: QueryError) -> Self {
        Self {
            data: None,
            error: Some(error),
            is_loading: false,
            is_fetching: false,
        }
    }

    /// Terminal state from a fetch outcome.
    pub fn settled(outcome: Result<T, QueryError>) -> Self {
        match outcome {
            Ok(data) => Self::loaded(data),
            Err(e) => Self::failed(e),
        }
    }

    /// Background refresh: keep whatever is currently shown, raise the
    /// fetching flag. Never reverts a loaded result to loading.
    pub fn refetching(mut self) -> Self {
        self.is_fetching = true;
        self
    }

    /// The data/error exclusivity invariant.
    pub fn is_consistent(&self) -> bool {
        !(self.data.is_some() && self.error.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_states_are_consistent() {
        assert!(QueryResult::<u32>::loading().is_consistent());
        assert!(QueryResult::<u32>::pending().is_consistent());
        assert!(QueryResult::loaded(7).is_consistent());
        assert!(QueryResult::<u32>::failed(QueryError::Api("boom".into())).is_consistent());
    }

    #[test]
    fn test_settled_sets_exactly_one_side() {
        let ok = QueryResult::settled(Ok(1));
        assert_eq!(ok.data, Some(1));
        assert!(ok.error.is_none());
        assert!(!ok.is_loading);

        let err: QueryResult<u32> = QueryResult::settled(Err(QueryError::Api("down".into())));
        assert!(err.data.is_none());
        assert!(err.error.is_some());
        assert!(!err.is_loading);
    }

    #[test]
    fn test_refetching_keeps_data() {
        let refreshed = QueryResult::loaded("v1").refetching();
        assert_eq!(refreshed.data, Some("v1"));
        assert!(refreshed.is_fetching);
        assert!(!refreshed.is_loading);
    }
}
