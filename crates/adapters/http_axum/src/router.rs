//! Axum router assembly.

use axum::Router;
use axum::http::header;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use filialen_app::ports::FiliaalRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the `/filialen` resource, its OpenAPI document at `/openapi.json`
/// and a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a [`CorsLayer`] that
/// exposes the `Location` header to browser clients.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: FiliaalRepository + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::LOCATION]);

    Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(crate::doc::openapi))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
