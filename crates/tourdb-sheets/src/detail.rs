//! Assembled page views: a package with its per-package lists, and a
//! destination with its packages.
//!
//! The underlying reads are independent, so each view issues them
//! concurrently; no ordering between the fetches is assumed.

use tourdb_core::{Destination, ItineraryItem, Package, PackageNote, Policy};

use crate::client::SheetsClient;
use crate::error::SheetsError;

/// Everything the package detail page renders for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDetail {
    pub package: Package,
    pub itinerary: Vec<ItineraryItem>,
    pub inclusions: Vec<PackageNote>,
    pub exclusions: Vec<PackageNote>,
    pub policies: Vec<Policy>,
}

impl SheetsClient {
    /// Fetches a package and its itinerary, inclusions, exclusions, and
    /// policies in one concurrent sweep. Returns `None` when no package has
    /// the given id, so the caller can render its not-found page.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SheetsError`] from any of the five reads.
    pub async fn package_detail(&self, id: &str) -> Result<Option<PackageDetail>, SheetsError> {
        let (packages, itinerary, inclusions, exclusions, policies) = tokio::try_join!(
            self.get_packages(),
            self.get_itinerary(),
            self.get_inclusions(),
            self.get_exclusions(),
            self.get_policies(),
        )?;

        let Some(package) = packages.into_iter().find(|p| p.id == id) else {
            return Ok(None);
        };

        Ok(Some(PackageDetail {
            itinerary: itinerary
                .into_iter()
                .filter(|item| item.package_id == id)
                .collect(),
            inclusions: inclusions
                .into_iter()
                .filter(|note| note.package_id == id)
                .collect(),
            exclusions: exclusions
                .into_iter()
                .filter(|note| note.package_id == id)
                .collect(),
            policies: policies
                .into_iter()
                .filter(|policy| policy.package_id == id)
                .collect(),
            package,
        }))
    }

    /// Fetches a destination by slug together with the packages offered for
    /// it. Returns `None` when the slug is unknown.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SheetsError`] from either read.
    pub async fn destination_page(
        &self,
        slug: &str,
    ) -> Result<Option<(Destination, Vec<Package>)>, SheetsError> {
        let (destinations, packages) =
            tokio::try_join!(self.get_destinations(), self.get_packages())?;

        let Some(destination) = destinations.into_iter().find(|d| d.slug == slug) else {
            return Ok(None);
        };

        let offered = packages
            .into_iter()
            .filter(|p| p.destination == slug)
            .collect();
        Ok(Some((destination, offered)))
    }
}
