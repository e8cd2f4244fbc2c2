//! Dashboard filtering and summary counts over a list of leads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lead::{Cell, Lead, LeadStatus};

/// Status filter value that disables status filtering.
pub const ALL_STATUSES: &str = "all";

/// Text and status filter applied to the dashboard lead list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadFilter {
    /// Case-insensitive substring matched against the lead name and the
    /// producer the lead was forwarded to.
    pub search: Option<String>,
    /// Exact status label, or `all`.
    pub status: Option<String>,
}

impl LeadFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.status.as_deref().is_none_or(|s| s == ALL_STATUSES)
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        self.matches_search(lead) && self.matches_status(lead)
    }

    /// Keep the matching leads, preserving their order.
    pub fn apply(&self, leads: Vec<Lead>) -> Vec<Lead> {
        if self.is_empty() {
            return leads;
        }
        leads.into_iter().filter(|lead| self.matches(lead)).collect()
    }

    fn matches_search(&self, lead: &Lead) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let term = term.to_lowercase();
        let contains =
            |cell: &Cell| cell.to_text().is_some_and(|text| text.to_lowercase().contains(&term));
        contains(&lead.lead_name) || contains(&lead.producer_lead_forwarded_to)
    }

    fn matches_status(&self, lead: &Lead) -> bool {
        match self.status.as_deref() {
            None | Some(ALL_STATUSES) => true,
            Some(wanted) => lead.status.as_str() == Some(wanted),
        }
    }
}

/// Headline counts shown above the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub total: usize,
    /// Count per known status label. Every label is present, zero or not.
    pub by_status: BTreeMap<&'static str, usize>,
    /// Leads with no status or a label outside [`LeadStatus::ALL`].
    pub unassigned: usize,
}

impl LeadSummary {
    pub fn from_leads(leads: &[Lead]) -> Self {
        let mut by_status: BTreeMap<&'static str, usize> =
            LeadStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
        let mut unassigned = 0;

        for lead in leads {
            match lead.status_kind() {
                Some(status) => *by_status.entry(status.as_str()).or_default() += 1,
                None => unassigned += 1,
            }
        }

        Self {
            total: leads.len(),
            by_status,
            unassigned,
        }
    }
}
