//! Model layer
//!
//! Resource kinds, identities, and the typed view records the detail
//! pages render.

pub mod identity;
pub mod records;
pub mod resource_kind;

pub use identity::{QueryKey, ResourceIdentity};
pub use records::TypedResource;
pub use resource_kind::ResourceKind;
