//! Mergington Activities HTTP Transport
//!
//! Serves the activity directory over HTTP using axum.
//! The transport layer handles:
//! - Routing and path/query extraction
//! - Mapping directory errors to status codes and `{"detail": ...}` bodies
//! - Health reporting and optional static front-end files
//! - Server lifecycle (bind, serve, graceful stop)
//!
//! The transport is decoupled from the directory via the `ActivityStore` trait.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{TransportConfig, TransportServer, router};
