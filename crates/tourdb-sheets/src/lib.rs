//! HTTP client for the spreadsheet-backed store behind the tourdb site.
//!
//! The store exposes one base endpoint with a `sheet` query parameter
//! selecting a named tab and imposes no schema on its rows, so this crate
//! owns two jobs: talking to the endpoint (bearer auth, typed errors, retry,
//! optional bounded-staleness caching) and normalizing whatever comes back
//! into the fixed-shape records of `tourdb-core`. The one write path,
//! [`SheetsClient::submit_lead`], appends enquiry rows to the `leads` tab.

pub mod cache;
pub mod client;
pub mod detail;
pub mod error;
pub mod leads;
pub mod normalize;
pub mod reads;
mod retry;
pub mod types;

pub use cache::FreshnessPolicy;
pub use client::SheetsClient;
pub use detail::PackageDetail;
pub use error::SheetsError;
pub use leads::LeadOutcome;
pub use types::{RawRow, Sheet};
