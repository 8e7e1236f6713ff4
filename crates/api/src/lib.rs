//! HTTP API serving a static profile enriched with an upstream fact.
//!
//! Provides `/me`, `/health` and `/metrics`, with a JSON 404 for anything
//! else, structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::Profile;
use fact_client::FactSource;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::profile::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<F: FactSource + 'static>(
    state: Arc<AppState<F>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/me", get(routes::profile::me::<F>))
        .with_state(state)
        .merge(metrics_router)
        .fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state from the loaded profile and a fact source.
pub fn create_default_state<F: FactSource>(profile: Profile, facts: F) -> Arc<AppState<F>> {
    Arc::new(AppState { profile, facts })
}
