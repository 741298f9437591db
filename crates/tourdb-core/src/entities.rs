//! Records served to the presentation layer, normalized from the sheet store.
//!
//! Every field is guaranteed present and typed once a record exists: the
//! normalization step in `tourdb-sheets` is the only place that deals with
//! missing keys or numbers-as-strings, so nothing downstream null-checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tour package offered for a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Opaque row identifier assigned by the sheet store.
    pub id: String,
    /// Slug of the [`Destination`] this package belongs to.
    pub destination: String,
    pub title: String,
    /// Card/hero image URL.
    pub image: String,
    pub days: u32,
    pub nights: u32,
    /// Hotel star rating.
    pub rating: u32,
    /// Whole currency units, per person.
    pub price: u32,
    pub overview: String,
}

/// One itinerary row for a package. Several rows may share the same
/// `(package_id, day)` pair; [`group_by_day`] folds them into day entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub package_id: String,
    pub day: u32,
    pub title: String,
    pub bullets: String,
}

/// A single day of an itinerary, assembled from every [`ItineraryItem`]
/// sharing that day number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    /// Title of the day's first item, matching how the detail page labels
    /// its accordion headers.
    pub title: String,
    pub bullets: Vec<String>,
}

/// One bullet in a package's inclusions or exclusions list. The two sheets
/// share this shape, so one type backs both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNote {
    pub package_id: String,
    pub item: String,
}

/// Category of a [`Policy`] row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Payment,
    Cancellation,
    Terms,
}

impl PolicyKind {
    /// Parses the sheet's `type` column. Unknown values return `None`; the
    /// normalizer skips those rows rather than failing the whole read.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "payment" => Some(Self::Payment),
            "cancellation" => Some(Self::Cancellation),
            "terms" => Some(Self::Terms),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Cancellation => "cancellation",
            Self::Terms => "terms",
        }
    }
}

/// A payment/cancellation/terms policy paragraph for a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub package_id: String,
    pub kind: PolicyKind,
    pub text: String,
}

/// A destination landing-page record, keyed by URL slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub slug: String,
    pub name: String,
    pub subtitle: String,
    pub hero_image: String,
    pub description: String,
    pub country: Option<String>,
}

/// An enquiry captured from the contact form. `package_id` is empty for a
/// general enquiry. The submission timestamp is stamped by the store client,
/// never supplied here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadForm {
    pub package_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl LeadForm {
    /// Checks the required contact fields. The form UI validates too, but
    /// this layer must not trust its caller.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first required
    /// field that is empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        Ok(())
    }
}

/// Folds itinerary rows into per-day entries ordered by day number.
///
/// Rows keep their input order within a day; the day's title comes from its
/// first row. Rows for other packages should be filtered out by the caller
/// beforehand.
#[must_use]
pub fn group_by_day(items: &[ItineraryItem]) -> Vec<ItineraryDay> {
    let mut days: Vec<ItineraryDay> = Vec::new();
    for item in items {
        match days.iter_mut().find(|d| d.day == item.day) {
            Some(day) => day.bullets.push(item.bullets.clone()),
            None => days.push(ItineraryDay {
                day: item.day,
                title: item.title.clone(),
                bullets: vec![item.bullets.clone()],
            }),
        }
    }
    days.sort_by_key(|d| d.day);
    days
}
