use axum::routing::get;
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Lead routes, mounted under `/api/leads`.
///
/// ```text
/// GET   /                  list (optional ?search=&status=)
/// GET   /summary           headline counts
/// GET   /{id}              get
/// PUT   /{id}              update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list_leads))
        .route("/summary", get(leads::lead_summary))
        .route("/{id}", get(leads::get_lead).put(leads::update_lead))
}
