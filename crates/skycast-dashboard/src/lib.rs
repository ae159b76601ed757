//! Dashboard view for Skycast
//!
//! The view is an explicit state struct ([`Dashboard`]), a pure render
//! function ([`render`]) and a fetch controller ([`refresh`]), so the
//! update contract is testable without any UI framework lifecycle.

pub mod controller;
pub mod render;
pub mod state;

pub use controller::refresh;
pub use render::render;
pub use state::{Dashboard, FetchRequest, DEFAULT_COORDINATES};
