//! Profile endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use domain::{Profile, build_profile_response};
use fact_client::FactSource;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<F: FactSource> {
    pub profile: Profile,
    pub facts: F,
}

/// GET /me — returns the profile with a freshly fetched fact.
///
/// Upstream failures never fail the request; they surface as fallback fact
/// text with status 200.
#[tracing::instrument(skip(state))]
pub async fn me<F: FactSource + 'static>(
    State(state): State<Arc<AppState<F>>>,
) -> Result<Response, ApiError> {
    tracing::info!("profile endpoint accessed");
    metrics::counter!("profile_requests_total").increment(1);

    let outcome = state.facts.fetch().await;
    tracing::debug!(outcome = %outcome, "fact lookup finished");

    let body = build_profile_response(&state.profile, outcome.into_fact(), Utc::now())?;
    tracing::info!("generated profile response");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
