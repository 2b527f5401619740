//! View rendering modules

pub mod detail;
pub mod helpers;
pub mod list;

pub use detail::render_detail;
pub use list::{render_automations, render_sources};
