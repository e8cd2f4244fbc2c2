pub mod health;
pub mod leads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /leads                  list
/// /leads/summary          dashboard counts
/// /leads/{id}             get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/leads", leads::router())
}
