use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio_util::sync::CancellationToken;

use super::models::{AnalyzeRequest, AnalyzeResponse, error_response};
use crate::application::ports::FileLoader;
use crate::application::services::entries_from_manual_input;
use crate::presentation::state::AppState;

#[tracing::instrument(skip_all)]
pub async fn analyze_handler<F>(
    State(state): State<AppState<F>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response
where
    F: FileLoader + 'static,
{
    let entries = match entries_from_manual_input(&request.text) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "Manual input produced no entries");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    // Dropping the handler future (client disconnect) cancels the batch.
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    match state.analysis_service.analyze_batch(entries, cancel).await {
        Ok(results) => {
            tracing::info!(result_count = results.len(), "Manual batch analysed");
            (StatusCode::OK, Json(AnalyzeResponse::from_results(&results))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Manual batch analysis failed");
            e.into_response()
        }
    }
}
