//! HTTP API.
//!
//! Exposes the diagnosis flow as JSON endpoints for the web form.
//! Routes are nested under `/api/` behind a permissive CORS layer;
//! the form is served separately during development.
//!
//! The router is composable — `api_router()` returns a `Router` that
//! can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
