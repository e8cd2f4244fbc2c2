#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use leadflow_api::config::ServerConfig;
use leadflow_api::router::build_app_router;
use leadflow_api::state::AppState;
use leadflow_records::{RecordStoreClient, RecordStoreConfig};

pub const TEST_TOKEN: &str = "pat.test-token";
pub const TEST_BASE: &str = "appTest";
pub const TEST_TABLE: &str = "tblLeads";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
    }
}

/// Build the full application router pointed at the record store API hosted
/// at `api_url`.
pub fn build_test_app(api_url: &str) -> Router {
    let config = test_config();
    let store_config = RecordStoreConfig {
        access_token: TEST_TOKEN.to_string(),
        base_id: TEST_BASE.to_string(),
        table_id: TEST_TABLE.to_string(),
        api_url: String::new(),
    }
    .with_api_url(api_url);

    let state = AppState {
        config: Arc::new(config.clone()),
        records: RecordStoreClient::new(Arc::new(store_config)),
    };

    build_app_router(state, &config)
}

/// Path prefix every outbound call is expected to carry.
pub fn table_path(suffix: &str) -> String {
    format!("/v0/{TEST_BASE}/{TEST_TABLE}{suffix}")
}

// ---------------------------------------------------------------------------
// Fake record store
// ---------------------------------------------------------------------------

/// A request received by the fake record store.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

struct FakeStoreState {
    status: StatusCode,
    body: Value,
    captured: Mutex<Vec<CapturedRequest>>,
}

/// An in-process HTTP server standing in for the record store. Answers every
/// request with the same status and JSON body and records what it received.
pub struct FakeStore {
    pub api_url: String,
    state: Arc<FakeStoreState>,
}

impl FakeStore {
    pub async fn start(status: StatusCode, body: Value) -> Self {
        let state = Arc::new(FakeStoreState {
            status,
            body,
            captured: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(capture)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            api_url: format!("http://{addr}"),
            state,
        }
    }

    pub async fn ok(body: Value) -> Self {
        Self::start(StatusCode::OK, body).await
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one outbound call");
        requests.into_iter().next().unwrap()
    }
}

async fn capture(
    State(state): State<Arc<FakeStoreState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.captured.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).ok(),
    });

    (state.status, axum::Json(state.body.clone())).into_response()
}

/// A URL on which nothing is listening, so every call fails at the
/// transport level.
pub async fn unreachable_api_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
