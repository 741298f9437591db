//! Domain types and pure catalog logic for the tourdb travel-agency backend.
//!
//! Everything here is deliberately free of I/O: the records produced by the
//! sheet-store client (`tourdb-sheets`), the filter/sort engine that drives
//! the package catalog, and the application configuration loaded from the
//! environment.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod entities;

pub use app_config::AppConfig;
pub use catalog::{filter_and_sort, BudgetTier, Criteria, DurationTier, SortKey};
pub use config::{load_app_config, load_app_config_from_env};
pub use entities::{
    group_by_day, Destination, ItineraryDay, ItineraryItem, LeadForm, Package, PackageNote,
    Policy, PolicyKind, ValidationError,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
