//! Typed read operations, one per sheet.
//!
//! Each accessor fetches the sheet's raw rows and maps them through the
//! normalizers, so callers only ever see fully-defaulted records.

use tourdb_core::{Destination, ItineraryItem, Package, PackageNote, Policy};

use crate::client::SheetsClient;
use crate::error::SheetsError;
use crate::normalize;
use crate::types::Sheet;

impl SheetsClient {
    /// Fetches every tour package.
    ///
    /// Missing or malformed numeric columns coerce to their defaults
    /// (`rating` 4, everything else 0); this read never fails on row shape.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the underlying fetch.
    pub async fn get_packages(&self) -> Result<Vec<Package>, SheetsError> {
        let rows = self.fetch_rows(Sheet::Packages).await?;
        Ok(rows.iter().map(normalize::package_from_row).collect())
    }

    /// Fetches every itinerary row across all packages.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the underlying fetch.
    pub async fn get_itinerary(&self) -> Result<Vec<ItineraryItem>, SheetsError> {
        let rows = self.fetch_rows(Sheet::Itinerary).await?;
        Ok(rows.iter().map(normalize::itinerary_from_row).collect())
    }

    /// Fetches the inclusions list across all packages.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the underlying fetch.
    pub async fn get_inclusions(&self) -> Result<Vec<PackageNote>, SheetsError> {
        let rows = self.fetch_rows(Sheet::Inclusions).await?;
        Ok(rows.iter().map(normalize::note_from_row).collect())
    }

    /// Fetches the exclusions list across all packages.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the underlying fetch.
    pub async fn get_exclusions(&self) -> Result<Vec<PackageNote>, SheetsError> {
        let rows = self.fetch_rows(Sheet::Exclusions).await?;
        Ok(rows.iter().map(normalize::note_from_row).collect())
    }

    /// Fetches all policy paragraphs. Rows with an unrecognized policy type
    /// are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the underlying fetch.
    pub async fn get_policies(&self) -> Result<Vec<Policy>, SheetsError> {
        let rows = self.fetch_rows(Sheet::Policies).await?;
        Ok(rows.iter().filter_map(normalize::policy_from_row).collect())
    }

    /// Fetches every destination landing-page record.
    ///
    /// # Errors
    ///
    /// Propagates any [`SheetsError`] from the underlying fetch.
    pub async fn get_destinations(&self) -> Result<Vec<Destination>, SheetsError> {
        let rows = self.fetch_rows(Sheet::Destinations).await?;
        Ok(rows.iter().map(normalize::destination_from_row).collect())
    }
}
