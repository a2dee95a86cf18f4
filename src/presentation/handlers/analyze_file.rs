use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio_util::sync::CancellationToken;

use super::models::{AnalyzeResponse, error_response};
use crate::application::ports::FileLoader;
use crate::application::services::resolve_document;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_file_handler<F>(
    State(state): State<AppState<F>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Analyze request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime = field.content_type().map(str::to_string);

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    tracing::debug!(
        filename = %filename,
        content_type = mime.as_deref().unwrap_or("none"),
        bytes = data.len(),
        "File data received"
    );

    let document = match resolve_document(&filename, mime.as_deref(), data.len() as u64) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected upload");
            return e.into_response();
        }
    };

    let entries = match state.segment_extractor.extract(&data, &document).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, filename = %filename, "Segmentation failed");
            return e.into_response();
        }
    };

    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    match state.analysis_service.analyze_batch(entries, cancel).await {
        Ok(results) => {
            tracing::info!(
                document_id = %document.id.as_uuid(),
                result_count = results.len(),
                "File analysed"
            );
            (StatusCode::OK, Json(AnalyzeResponse::from_results(&results))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "File batch analysis failed");
            e.into_response()
        }
    }
}
