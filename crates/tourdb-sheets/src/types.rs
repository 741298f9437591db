//! Wire-level types for the sheet store.
//!
//! Rows arrive as free-form JSON objects (the store imposes no schema), so
//! the raw shape is simply [`RawRow`]. Typed records come out of the
//! `normalize` module.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use tourdb_core::LeadForm;

/// One raw row as returned by the store: arbitrary keys, arbitrary value
/// types. Normalization absorbs all of that uncertainty.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

/// The named tabs of the spreadsheet store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
    Packages,
    Itinerary,
    Inclusions,
    Exclusions,
    Policies,
    Destinations,
    Leads,
}

impl Sheet {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Packages => "packages",
            Self::Itinerary => "itinerary",
            Self::Inclusions => "inclusions",
            Self::Exclusions => "exclusions",
            Self::Policies => "policies",
            Self::Destinations => "destinations",
            Self::Leads => "leads",
        }
    }

    /// Value of the `sheet` query parameter for reads. The packages sheet is
    /// the store's default tab and is addressed without one.
    pub(crate) fn query_param(self) -> Option<&'static str> {
        match self {
            Self::Packages => None,
            other => Some(other.name()),
        }
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional error body on non-2xx responses: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// One lead row as written to the `leads` sheet. Column names match the
/// sheet headers, which follow the store's camelCase convention.
#[derive(Debug, Serialize)]
pub(crate) struct LeadRow {
    #[serde(rename = "packageId")]
    pub package_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Submission timestamp, ISO-8601 UTC (`2026-08-04T09:30:00Z`).
    pub date: String,
}

impl LeadRow {
    pub fn from_form(form: &LeadForm, submitted_at: DateTime<Utc>) -> Self {
        Self {
            package_id: form.package_id.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            message: form.message.clone(),
            date: submitted_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// POST body for appending rows: `{"data": [row], "sheet": "leads"}`.
#[derive(Debug, Serialize)]
pub(crate) struct AppendRequest {
    pub data: Vec<LeadRow>,
    pub sheet: &'static str,
}
