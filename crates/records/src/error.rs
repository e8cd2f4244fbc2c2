use leadflow_core::error::MappingError;

/// Errors from the record store client.
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The record store returned a non-2xx status code.
    #[error("Record store API error: {reason}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical status text, e.g. `Not Found`.
        reason: String,
        /// Raw response body for debugging.
        body: String,
    },

    /// The request URL could not be built, e.g. a record id of `..`.
    #[error("Invalid record store URL: {0}")]
    InvalidUrl(String),

    /// The response could not be interpreted as lead records.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl RecordStoreError {
    /// Whether the store reported the requested record as unknown.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecordStoreError::Status { status: 404, .. })
    }
}
