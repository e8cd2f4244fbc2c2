//! Lead operations against the record store.

use leadflow_core::error::MappingError;
use leadflow_core::lead::{ExternalRecord, Lead};
use leadflow_core::mapping;
use serde_json::{json, Value};

use crate::client::{CallOptions, RecordStoreClient};
use crate::error::RecordStoreError;

/// Read and write access to the lead table.
///
/// Each operation performs exactly one outbound call. Writes are
/// last-write-wins: there is no version check against concurrent edits.
pub struct LeadRepo;

impl LeadRepo {
    /// List all leads in the order the store returns them.
    ///
    /// Fails only when the response has no `records` collection or a record
    /// has no id; cell values never fail the list.
    pub async fn list(client: &RecordStoreClient) -> Result<Vec<Lead>, RecordStoreError> {
        let response = client.call(&[], CallOptions::get()).await?;
        let leads: Vec<_> = parse_records(response)?
            .iter()
            .map(mapping::to_internal)
            .collect();

        tracing::debug!(count = leads.len(), "Fetched leads");
        Ok(leads)
    }

    /// Fetch a single lead. An unknown id surfaces as a 404
    /// [`RecordStoreError::Status`].
    pub async fn get(client: &RecordStoreClient, id: &str) -> Result<Lead, RecordStoreError> {
        let response = client.call(&[id], CallOptions::get()).await?;
        let record = parse_record(response)?;
        Ok(mapping::to_internal(&record))
    }

    /// Write every attribute present in `lead` to record `id`; `null`
    /// attributes clear the stored cell.
    ///
    /// Returns the store's response body as-is, in column-name form. The
    /// `id` inside `lead` is ignored in favour of the `id` argument.
    pub async fn update(
        client: &RecordStoreClient,
        id: &str,
        lead: &Lead,
    ) -> Result<Value, RecordStoreError> {
        let body = json!({ "fields": mapping::to_external(lead) });
        client.call(&[id], CallOptions::patch(body)).await
    }
}

/// Extract the `records` collection from a list response.
fn parse_records(response: Value) -> Result<Vec<ExternalRecord>, MappingError> {
    let Value::Object(mut body) = response else {
        return Err(MappingError::MissingCollection);
    };
    match body.remove("records") {
        Some(records @ Value::Array(_)) => serde_json::from_value(records)
            .map_err(|e| MappingError::InvalidRecord(e.to_string())),
        _ => Err(MappingError::MissingCollection),
    }
}

fn parse_record(response: Value) -> Result<ExternalRecord, MappingError> {
    serde_json::from_value(response).map_err(|e| MappingError::InvalidRecord(e.to_string()))
}
