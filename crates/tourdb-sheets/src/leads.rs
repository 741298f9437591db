//! The enquiry write path.
//!
//! Unlike the reads, submission converts every failure into a value: it
//! always backs a user-facing form that needs a message to render inline,
//! never an exception to catch.

use chrono::Utc;

use tourdb_core::LeadForm;

use crate::client::SheetsClient;
use crate::error::SheetsError;
use crate::types::{AppendRequest, LeadRow, Sheet};

/// Result of a lead submission. `Rejected` carries a message suitable for
/// showing next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadOutcome {
    Accepted,
    Rejected(String),
}

impl LeadOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected(message) => Some(message),
        }
    }
}

impl SheetsClient {
    /// Validates the form and appends one row to the `leads` sheet, with the
    /// submission timestamp stamped here in ISO-8601 UTC.
    ///
    /// A validation failure returns `Rejected` without touching the network.
    /// Transport and upstream failures also come back as `Rejected`; this
    /// method never returns an error past its own boundary. The POST is not
    /// retried; the store has no deduplication and a retry could file the
    /// same enquiry twice.
    pub async fn submit_lead(&self, form: &LeadForm) -> LeadOutcome {
        if let Err(invalid) = form.validate() {
            return LeadOutcome::Rejected(invalid.to_string());
        }

        let request = AppendRequest {
            data: vec![LeadRow::from_form(form, Utc::now())],
            sheet: Sheet::Leads.name(),
        };

        match self.append_rows(&request).await {
            Ok(()) => {
                tracing::debug!(package_id = %form.package_id, "lead accepted");
                LeadOutcome::Accepted
            }
            Err(err) => {
                tracing::warn!(error = %err, "lead submission failed");
                LeadOutcome::Rejected(rejection_message(&err))
            }
        }
    }
}

/// Turns a store failure into wording fit for the enquiry form. Upstream
/// messages are passed along; everything else gets a generic retry prompt.
fn rejection_message(err: &SheetsError) -> String {
    match err {
        SheetsError::Upstream {
            message: Some(message),
            ..
        } => message.clone(),
        SheetsError::RateLimited { .. } => {
            "The enquiry service is busy right now. Please try again in a moment.".to_string()
        }
        _ => "Could not submit your enquiry. Please try again.".to_string(),
    }
}
