use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leadflow_records::RecordStoreError;
use serde_json::json;

/// Application-level error type for lead handlers.
///
/// Every variant wraps the underlying [`RecordStoreError`] for logging but
/// renders as a 500 with a fixed message, so upstream status text and bodies
/// never reach the caller. A missing record and an unreachable store look the
/// same from outside.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch leads")]
    FetchLeads(#[source] RecordStoreError),

    #[error("Failed to fetch lead")]
    FetchLead(#[source] RecordStoreError),

    #[error("Failed to update lead")]
    UpdateLead(#[source] RecordStoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn source_error(&self) -> &RecordStoreError {
        match self {
            AppError::FetchLeads(err) | AppError::FetchLead(err) | AppError::UpdateLead(err) => {
                err
            }
        }
    }

    fn log_message(&self) -> &'static str {
        match self {
            AppError::FetchLeads(_) => "Error fetching leads",
            AppError::FetchLead(_) => "Error fetching lead",
            AppError::UpdateLead(_) => "Error updating lead",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let source = self.source_error();
        tracing::error!(
            error = %source,
            not_found = source.is_not_found(),
            "{}",
            self.log_message(),
        );

        let body = json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
