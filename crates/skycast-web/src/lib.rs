//! HTTP surface for Skycast
//!
//! The bootstrap responder (any method, any path, one fixed shell) plus
//! the two routes that make the shell functional: the glue module and the
//! rendered view.

pub mod server;
pub mod shell;

pub use server::{create_router, run_server, AppState};
