//! Handlers for the lead dashboard and the lead detail/edit view.
//!
//! Each handler makes exactly one call to the record store and awaits it
//! inline. Nothing is cached between requests.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use leadflow_core::dashboard::{LeadFilter, LeadSummary};
use leadflow_core::lead::Lead;
use leadflow_records::LeadRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/leads
///
/// List leads in store order, optionally narrowed by `?search=` (lead name or
/// producer, case-insensitive) and `?status=` (exact label, or `all`).
pub async fn list_leads(
    State(state): State<AppState>,
    Query(filter): Query<LeadFilter>,
) -> AppResult<impl IntoResponse> {
    let leads = LeadRepo::list(&state.records)
        .await
        .map_err(AppError::FetchLeads)?;

    Ok(Json(filter.apply(leads)))
}

/// GET /api/leads/summary
///
/// Total lead count plus counts per status.
pub async fn lead_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let leads = LeadRepo::list(&state.records)
        .await
        .map_err(AppError::FetchLeads)?;

    Ok(Json(LeadSummary::from_leads(&leads)))
}

/// GET /api/leads/{id}
pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let lead = LeadRepo::get(&state.records, &id)
        .await
        .map_err(AppError::FetchLead)?;

    Ok(Json(lead))
}

/// PUT /api/leads/{id}
///
/// Write the lead back to the store. Attributes sent as `null` clear the
/// stored cell; attributes left out are untouched. The response body is the store's
/// raw update response (column-name form), not a re-mapped [`Lead`].
/// Concurrent edits are last-write-wins.
pub async fn update_lead(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(lead): Json<Lead>,
) -> AppResult<impl IntoResponse> {
    let updated = LeadRepo::update(&state.records, &id, &lead)
        .await
        .map_err(AppError::UpdateLead)?;

    tracing::info!(lead_id = %id, "Lead updated");

    Ok(Json(updated))
}
