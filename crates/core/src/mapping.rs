//! Field mapper between record store columns and [`Lead`] attributes.
//!
//! Both directions are driven by the single [`FIELD_MAP`] table, so a column
//! rename only ever touches one line.

use serde_json::{Map, Value};

use crate::lead::{Cell, ExternalRecord, Lead};

/// One internal attribute and the store column it corresponds to.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    /// camelCase attribute name on [`Lead`].
    pub internal: &'static str,
    /// Column name in the record store.
    pub external: &'static str,
    pub get: fn(&Lead) -> &Cell,
    pub get_mut: fn(&mut Lead) -> &mut Cell,
}

macro_rules! field {
    ($attr:ident, $internal:literal, $external:literal) => {
        FieldMapping {
            internal: $internal,
            external: $external,
            get: |lead| &lead.$attr,
            get_mut: |lead| &mut lead.$attr,
        }
    };
}

/// The complete lead field set. Each internal name and each external name
/// appears exactly once.
pub const FIELD_MAP: &[FieldMapping] = &[
    field!(lead_name, "leadName", "Lead Name"),
    field!(lead_forwarded_date, "leadForwardedDate", "Lead Forwarded Date"),
    field!(
        form_submission_email_content,
        "formSubmissionEmailContent",
        "Form Submission Email Content"
    ),
    field!(
        producer_lead_forwarded_to,
        "producerLeadForwardedTo",
        "Producer - Lead Forwarded To"
    ),
    field!(
        producer_who_accepted_lead,
        "producerWhoAcceptedLead",
        "Name - Producer Who Accepted The Lead"
    ),
    field!(contact_email, "contactEmail", "Contact Email (from Producer)"),
    field!(hubspot_deal_id, "hubspotDealId", "Hubspot Deal ID"),
    field!(
        days_since_lead_forwarded,
        "daysSinceLeadForwarded",
        "Days Since Lead Forwarded"
    ),
    field!(status, "status", "Status"),
    field!(
        latest_follow_up_notes,
        "latestFollowUpNotes",
        "Latest Follow Up Notes From Producer"
    ),
    field!(lead_accepted_date, "leadAcceptedDate", "Lead Accepted Date"),
    field!(
        business_lead_airtable_record_id,
        "businessLeadAirtableRecordId",
        "Business Lead Airtable - Record ID"
    ),
    field!(
        rejected_lead_producer,
        "rejectedLeadProducer",
        "Rejected Lead - Producer"
    ),
    field!(
        producer_airtable_record_id,
        "producerAirtableRecordId",
        "Producer Airtable Record ID (from Producer Who Rejected The Lead) (from Rejected Business Leads)"
    ),
    field!(type_form_submission_id, "typeFormSubmissionId", "TypeForm Submission ID"),
    field!(lead_category, "leadCategory", "Lead Category"),
    field!(
        customer_email_address,
        "customerEmailAddress",
        "Customer Email Address"
    ),
    field!(
        producer_follow_up_status,
        "producerFollowUpStatus",
        "Producer Follow Up Status"
    ),
    field!(one_time_check, "oneTimeCheck", "One Time Check"),
];

/// Translate a store record into a [`Lead`]. Never fails.
///
/// Each known column is copied as-is: lookup arrays stay arrays, formula
/// error objects stay objects, `null` stays `null`. Missing columns are
/// [`Cell::Absent`] and unknown columns are ignored.
pub fn to_internal(record: &ExternalRecord) -> Lead {
    let mut lead = Lead {
        id: record.id.clone(),
        ..Default::default()
    };
    for mapping in FIELD_MAP {
        if let Some(raw) = record.fields.get(mapping.external) {
            *(mapping.get_mut)(&mut lead) = Cell::from(raw.clone());
        }
    }
    lead
}

/// Translate a [`Lead`] into a store field map keyed by column name.
///
/// Absent attributes are omitted, which a partial update treats as "leave as
/// is". `null` attributes are written as `null` so the store clears the cell.
/// The record `id` is not a column and is never included.
pub fn to_external(lead: &Lead) -> Map<String, Value> {
    FIELD_MAP
        .iter()
        .filter_map(|mapping| {
            (mapping.get)(lead)
                .to_json()
                .map(|value| (mapping.external.to_string(), value))
        })
        .collect()
}
