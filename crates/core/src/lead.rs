//! Lead records: the internal representation served to the dashboard and the
//! raw record shape returned by the record store.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// One cell of a lead, kept exactly as the store (or the edit view) sent it.
///
/// The three states matter on write: an absent cell is left out of an
/// update, a `null` cell clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Absent,
    Null,
    Value(Value),
}

impl Cell {
    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    /// The cell if it holds a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Value(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// A display rendering of the cell. Lookup and linked-record cells hold
    /// arrays; their scalar items are joined with `", "`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Value(Value::Array(items)) => {
                let parts: Vec<_> = items.iter().filter_map(scalar_text).collect();
                Some(parts.join(", "))
            }
            Cell::Value(value) => scalar_text(value),
            _ => None,
        }
    }

    /// The JSON written to the store for this cell, or `None` when absent.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Cell::Absent => None,
            Cell::Null => Some(Value::Null),
            Cell::Value(value) => Some(value.clone()),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            value => Cell::Value(value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Value(Value::String(value.to_string()))
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Absent | Cell::Null => serializer.serialize_none(),
            Cell::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Cell::from)
    }
}

/// A tracked insurance referral, in the camelCase shape the UI consumes.
///
/// Expected shapes follow the store's columns (text, a day count for
/// `daysSinceLeadForwarded`, a checkbox for `oneTimeCheck`, arrays for
/// lookup and linked-record columns), but cells are not coerced: whatever
/// the store returns is served and written back unchanged. Absent cells are
/// skipped on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Record identifier assigned by the store. Immutable.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub lead_name: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub lead_forwarded_date: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub form_submission_email_content: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub producer_lead_forwarded_to: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub producer_who_accepted_lead: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub contact_email: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub hubspot_deal_id: Cell,
    /// Computed by the store from the forwarded date.
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub days_since_lead_forwarded: Cell,
    /// One of the [`LeadStatus`] labels. Unknown labels are kept verbatim.
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub status: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub latest_follow_up_notes: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub lead_accepted_date: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub business_lead_airtable_record_id: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub rejected_lead_producer: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub producer_airtable_record_id: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub type_form_submission_id: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub lead_category: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub customer_email_address: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub producer_follow_up_status: Cell,
    #[serde(default, skip_serializing_if = "Cell::is_absent")]
    pub one_time_check: Cell,
}

impl Lead {
    /// The lead's status as a known [`LeadStatus`], if it is one.
    pub fn status_kind(&self) -> Option<LeadStatus> {
        self.status.as_str().and_then(LeadStatus::parse)
    }
}

/// Workflow status labels used by the record store's `Status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Rejected,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::InProgress,
        LeadStatus::Completed,
        LeadStatus::Rejected,
    ];

    /// The label exactly as it appears in the record store.
    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::InProgress => "In Progress",
            LeadStatus::Completed => "Completed",
            LeadStatus::Rejected => "Rejected",
        }
    }

    /// Parse a store label. Matching is exact and case-sensitive.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }
}

/// A record as returned by the record store: an identifier plus a map of
/// human-readable column names to cell values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}
