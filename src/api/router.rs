//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Routes are nested under `/api/` behind a permissive CORS
//! layer so the separately-served web form can call them during
//! development.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
pub fn api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/diagnosis",
            get(endpoints::diagnosis::recent).post(endpoints::diagnosis::analyze),
        )
        .route("/diagnosis/:id", get(endpoints::diagnosis::detail))
        .with_state(ctx);

    Router::new().nest("/api", routes).layer(CorsLayer::permissive())
}
