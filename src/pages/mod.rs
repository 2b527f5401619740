//! Pages
//!
//! Everything between the query layer and the terminal UI: the route
//! table, query-string parameter resolution, the per-kind field
//! extractors and their registry, the generic detail shell, and the two
//! list pages.

pub mod automations;
pub mod detail;
pub mod extractors;
pub mod params;
pub mod routes;
pub mod rows;
pub mod sources;

pub use automations::AutomationsPage;
pub use detail::{DetailPage, DetailState};
pub use extractors::{extractor_for, FieldExtractor, PageEntry, DETAIL_REGISTRY};
pub use params::{resolve_detail_params, DetailParams};
pub use routes::Route;
pub use rows::{DisplayRow, RowValue};
pub use sources::SourcesPage;
