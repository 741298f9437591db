//! Catalog filtering and sorting.
//!
//! [`filter_and_sort`] is a pure function of `(packages, criteria)`: the
//! listing page recomputes it on every criteria change rather than diffing
//! incrementally, and the input list is never mutated.

use std::cmp::Reverse;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Package;

/// Upper price bound (inclusive) of the budget tier; also the lower bound
/// of the mid tier. A package priced exactly here passes both.
pub const BUDGET_PRICE_CAP: u32 = 50_000;
/// Lower price bound (inclusive) of the luxury tier; also the upper bound
/// of the mid tier.
pub const LUXURY_PRICE_FLOOR: u32 = 150_000;

/// Price bucket selected by the listing page's budget dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    #[default]
    All,
    Budget,
    Mid,
    Luxury,
}

impl BudgetTier {
    #[must_use]
    pub fn admits(self, price: u32) -> bool {
        match self {
            Self::All => true,
            Self::Budget => price <= BUDGET_PRICE_CAP,
            Self::Mid => (BUDGET_PRICE_CAP..=LUXURY_PRICE_FLOOR).contains(&price),
            Self::Luxury => price >= LUXURY_PRICE_FLOOR,
        }
    }
}

/// Trip-length bucket: short is 1-3 days, medium 4-7, long 8 and up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationTier {
    #[default]
    All,
    Short,
    Medium,
    Long,
}

impl DurationTier {
    #[must_use]
    pub fn admits(self, days: u32) -> bool {
        match self {
            Self::All => true,
            Self::Short => days <= 3,
            Self::Medium => (4..=7).contains(&days),
            Self::Long => days >= 8,
        }
    }
}

/// Ordering applied to the filtered subset. All orderings are stable:
/// packages with equal keys keep their filtered order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    DurationAsc,
    RatingDesc,
}

/// The listing page's full filter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub budget: BudgetTier,
    pub duration: DurationTier,
    pub sort_by: SortKey,
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "budget" => Ok(Self::Budget),
            "mid" => Ok(Self::Mid),
            "luxury" => Ok(Self::Luxury),
            other => Err(format!(
                "unknown budget tier '{other}' (expected all, budget, mid, or luxury)"
            )),
        }
    }
}

impl FromStr for DurationTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!(
                "unknown duration tier '{other}' (expected all, short, medium, or long)"
            )),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "duration-asc" => Ok(Self::DurationAsc),
            "rating-desc" => Ok(Self::RatingDesc),
            other => Err(format!(
                "unknown sort key '{other}' (expected none, price-asc, price-desc, \
                 duration-asc, or rating-desc)"
            )),
        }
    }
}

/// Computes the subset of `packages` passing every active criterion, in the
/// requested order.
///
/// Filtering is a logical AND across the budget and duration tiers; the tier
/// boundaries overlap at 50 000 / 150 000 rupees and at 3/4 and 7/8 days, so
/// a boundary-priced package appears under both adjacent tiers. Sorting is
/// applied after filtering and is stable.
#[must_use]
pub fn filter_and_sort(packages: &[Package], criteria: &Criteria) -> Vec<Package> {
    let mut selected: Vec<Package> = packages
        .iter()
        .filter(|p| criteria.budget.admits(p.price) && criteria.duration.admits(p.days))
        .cloned()
        .collect();

    match criteria.sort_by {
        SortKey::None => {}
        SortKey::PriceAsc => selected.sort_by_key(|p| p.price),
        SortKey::PriceDesc => selected.sort_by_key(|p| Reverse(p.price)),
        SortKey::DurationAsc => selected.sort_by_key(|p| p.days),
        SortKey::RatingDesc => selected.sort_by_key(|p| Reverse(p.rating)),
    }

    selected
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
