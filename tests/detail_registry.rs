//! Detail registry tests
//!
//! Every resource kind must resolve to exactly one detail page with a
//! working extractor, and every detail route must round-trip back to
//! its kind.

use fluxdash::models::ResourceKind;
use fluxdash::pages::{extractor_for, Route, DETAIL_REGISTRY};

#[test]
fn test_registry_covers_every_kind() {
    for kind in ResourceKind::all() {
        assert!(
            extractor_for(*kind).is_some(),
            "{} has no registered detail page",
            kind
        );
    }
}

#[test]
fn test_registry_has_no_duplicates() {
    for kind in ResourceKind::all() {
        let count = DETAIL_REGISTRY
            .iter()
            .filter(|entry| entry.kind == *kind)
            .count();
        assert_eq!(count, 1, "{} registered {} times", kind, count);
    }
    assert_eq!(DETAIL_REGISTRY.len(), ResourceKind::all().len());
}

#[test]
fn test_every_extractor_tolerates_missing_resource() {
    for entry in DETAIL_REGISTRY {
        let rows = (entry.extractor)(None);
        assert!(
            !rows.is_empty(),
            "{} extractor returned no rows for a missing resource",
            entry.kind
        );
        for row in &rows {
            assert!(
                row.value.is_empty(),
                "{} row {} should be empty without a resource",
                entry.kind,
                row.label
            );
        }
    }
}

#[test]
fn test_every_kind_has_a_route() {
    for kind in ResourceKind::all() {
        let route = Route::for_kind(*kind);
        assert_eq!(route.detail_kind(), Some(*kind));
        assert_eq!(Route::parse(route.path()), route);
    }
}

#[test]
fn test_common_rows_present_for_every_kind() {
    // Cluster and Namespace close out every detail page.
    for entry in DETAIL_REGISTRY {
        let labels: Vec<_> = (entry.extractor)(None)
            .iter()
            .map(|row| row.label)
            .collect();
        let len = labels.len();
        assert_eq!(
            &labels[len - 2..],
            &["Cluster", "Namespace"],
            "{} does not end with Cluster/Namespace",
            entry.kind
        );
    }
}
