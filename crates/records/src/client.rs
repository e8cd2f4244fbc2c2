//! REST client for one table of the record store.
//!
//! Wraps the store's HTTP API using [`reqwest`]. Every call makes exactly one
//! attempt: there is no retry, backoff or client-side timeout.

use std::sync::Arc;

use leadflow_core::error::MappingError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

use crate::config::RecordStoreConfig;
use crate::error::RecordStoreError;

/// Method, extra headers and optional JSON body for a single call.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub method: Method,
    /// Merged over the default headers; same-named entries win.
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl CallOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn patch(body: Value) -> Self {
        Self {
            method: Method::PATCH,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client bound to the configured base and table.
///
/// Cheap to clone: the inner [`reqwest::Client`] is reference counted and the
/// configuration is shared.
#[derive(Debug, Clone)]
pub struct RecordStoreClient {
    http: reqwest::Client,
    config: Arc<RecordStoreConfig>,
}

impl RecordStoreClient {
    pub fn new(config: Arc<RecordStoreConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Call the table URL extended by `segments` and return the parsed JSON
    /// body. Each segment is percent-encoded as a single path segment.
    ///
    /// Fails with [`RecordStoreError::InvalidUrl`] for an empty, `.` or `..`
    /// segment, [`RecordStoreError::Transport`] when the request cannot be
    /// sent, [`RecordStoreError::Status`] on a non-2xx response and
    /// [`RecordStoreError::Mapping`] when the body is not JSON.
    pub async fn call(
        &self,
        segments: &[&str],
        options: CallOptions,
    ) -> Result<Value, RecordStoreError> {
        let request = self.build_request(segments, options)?;
        tracing::debug!(
            method = %request.method(),
            path = request.url().path(),
            "Calling record store"
        );

        let response = self.http.execute(request).await?;
        Self::parse_response(response).await
    }

    /// Build the outgoing request without sending it.
    ///
    /// The bearer credential and JSON content type are always attached;
    /// caller headers replace same-named defaults.
    pub fn build_request(
        &self,
        segments: &[&str],
        options: CallOptions,
    ) -> Result<reqwest::Request, RecordStoreError> {
        let mut builder = self
            .http
            .request(options.method, self.table_url(segments)?)
            .bearer_auth(&self.config.access_token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .headers(options.headers);

        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }

    // ---- private helpers ----

    /// `{api_url}/v0/{base}/{table}` followed by `segments`.
    fn table_url(&self, segments: &[&str]) -> Result<reqwest::Url, RecordStoreError> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(RecordStoreError::InvalidUrl(format!(
                "unusable path segment {bad:?}"
            )));
        }

        let config = &self.config;
        let mut url = reqwest::Url::parse(&config.api_url)
            .map_err(|e| RecordStoreError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| RecordStoreError::InvalidUrl(config.api_url.clone()))?
            .pop_if_empty()
            .extend(["v0", config.base_id.as_str(), config.table_id.as_str()])
            .extend(segments);
        Ok(url)
    }

    /// Ensure the response has a success status code, capturing the status
    /// text and body on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, RecordStoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RecordStoreError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response(response: reqwest::Response) -> Result<Value, RecordStoreError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| RecordStoreError::Mapping(MappingError::InvalidJson(e.to_string())))
    }
}
