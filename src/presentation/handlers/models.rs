use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{AnalysisError, ExtractionError};
use crate::domain::{AnalysisResult, BatchSummary};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub results: Vec<AnalysisResultDto>,
    pub summary: BatchSummaryDto,
}

impl AnalyzeResponse {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        Self {
            results: results.iter().map(AnalysisResultDto::from).collect(),
            summary: BatchSummaryDto::from(&BatchSummary::from_results(results)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisResultDto {
    pub id: String,
    pub text: String,
    pub source: &'static str,
    pub entry_index: usize,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_metadata: Option<FileMetadataDto>,
    pub sentiment: &'static str,
    pub confidence: f64,
    pub label_source: &'static str,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FileMetadataDto {
    pub original_file: String,
    pub declared_type: &'static str,
    pub segment_type: &'static str,
}

impl From<&AnalysisResult> for AnalysisResultDto {
    fn from(result: &AnalysisResult) -> Self {
        let entry = &result.entry;
        Self {
            id: entry.id.as_uuid().to_string(),
            text: entry.text.clone(),
            source: entry.source.as_str(),
            entry_index: entry.entry_index,
            timestamp: entry.timestamp.to_rfc3339(),
            file_metadata: entry.file_metadata.as_ref().map(|m| FileMetadataDto {
                original_file: m.original_file.clone(),
                declared_type: m.declared_type.as_mime(),
                segment_type: m.segment_type.as_str(),
            }),
            sentiment: result.sentiment.as_str(),
            confidence: result.confidence,
            label_source: result.label_source.as_str(),
            keywords: result.keywords.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchSummaryDto {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub confidence_distribution: ConfidenceDistributionDto,
    pub mean_confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct ConfidenceDistributionDto {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl From<&BatchSummary> for BatchSummaryDto {
    fn from(summary: &BatchSummary) -> Self {
        Self {
            total: summary.total,
            positive: summary.positive,
            negative: summary.negative,
            neutral: summary.neutral,
            confidence_distribution: ConfidenceDistributionDto {
                low: summary.low_confidence,
                medium: summary.medium_confidence,
                high: summary.high_confidence,
            },
            mean_confidence: summary.mean_confidence,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ExtractionError {
    fn into_response(self) -> Response {
        let status = match &self {
            ExtractionError::InvalidFileFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ExtractionError::ContentUnreadable(_) | ExtractionError::EmptyBatch => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ExtractionError::ExtractionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match &self {
            AnalysisError::EmptyBatch => StatusCode::BAD_REQUEST,
            // Only reachable when the client went away; nobody reads this body.
            AnalysisError::Cancelled { .. } => StatusCode::REQUEST_TIMEOUT,
            AnalysisError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}
