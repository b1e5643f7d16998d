use std::sync::Arc;

use axum::{
    Json,
    extract::State,
};
use pr_reviewer::{publish_review, run_review};
use tracing::{debug, info, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::analyze_pr::{
        analyze_pr_request::AnalyzePrRequest, analyze_pr_response::AnalyzePrResponse,
    },
};

/// HTTP endpoint for analyzing a pull request.
///
/// Runs review generation (always succeeds; provider failures degrade to
/// fallback text) and, when the payload carries a GitHub token, publishes the
/// summary and line comments back to the PR. Publish failures map to a 500
/// with the error text.
#[instrument(
    name = "analyze_pr_route",
    skip(state, body),
    fields(pr = body.pr_number, repo = %body.repository)
)]
pub async fn analyze_pr(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzePrRequest>,
) -> AppResult<Json<AnalyzePrResponse>> {
    let request = body.into_review_request();

    info!("starting PR review");
    let outcome = run_review(&request, &state.llm_config).await;

    if !request.github_token.is_empty() {
        let anchored = publish_review(&request, &outcome).await?;
        debug!(anchored, "review published");
    } else {
        debug!("no token in payload, skipping publish");
    }

    Ok(Json(AnalyzePrResponse::from(outcome)))
}
