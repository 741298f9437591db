//! Normalization of raw sheet rows into `tourdb-core` records.
//!
//! The store returns whatever the spreadsheet holds: numbers as strings,
//! missing columns, keys whose casing drifted between edits. Every mapping
//! here is total: a malformed field becomes its documented default, never
//! an error, so downstream code can rely on fully-typed records.

use serde_json::Value;

use tourdb_core::{
    Destination, ItineraryItem, Package, PackageNote, Policy, PolicyKind,
};

use crate::types::RawRow;

/// Fallback star rating when the sheet omits or mangles the column.
pub const DEFAULT_RATING: u32 = 4;

/// Finds a column by exact key first, then ASCII-case-insensitively, so
/// `Days`/`PRICE` headers resolve the same as their lowercase forms.
fn lookup<'a>(row: &'a RawRow, key: &str) -> Option<&'a Value> {
    row.get(key).or_else(|| {
        row.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

/// Text column: strings pass through verbatim, numbers render to their
/// string form, anything else (missing, null, arrays…) becomes `""`.
pub(crate) fn text_field(row: &RawRow, key: &str) -> String {
    match lookup(row, key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Optional text column: like [`text_field`] but empty becomes `None`.
pub(crate) fn opt_text_field(row: &RawRow, key: &str) -> Option<String> {
    let value = text_field(row, key);
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Unsigned column: accepts JSON numbers (floats truncated, negatives fall
/// back) and numeric strings (trimmed; integer parse first, then float).
/// Anything unparseable yields `default`.
pub(crate) fn uint_field(row: &RawRow, key: &str, default: u32) -> u32 {
    lookup(row, key).map_or(default, |v| coerce_uint(v, default))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_uint(value: &Value, default: u32) -> u32 {
    let from_f64 = |f: f64| -> Option<u32> {
        (f.is_finite() && f >= 0.0 && f <= f64::from(u32::MAX)).then_some(f as u32)
    };
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|u| u32::try_from(u).ok())
            .or_else(|| n.as_f64().and_then(from_f64))
            .unwrap_or(default),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u32>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(from_f64))
                .unwrap_or(default)
        }
        _ => default,
    }
}

/// Maps one row of the packages sheet.
#[must_use]
pub fn package_from_row(row: &RawRow) -> Package {
    Package {
        id: text_field(row, "id"),
        destination: text_field(row, "destination"),
        title: text_field(row, "title"),
        image: text_field(row, "image"),
        days: uint_field(row, "days", 0),
        nights: uint_field(row, "nights", 0),
        rating: uint_field(row, "rating", DEFAULT_RATING),
        price: uint_field(row, "price", 0),
        overview: text_field(row, "overview"),
    }
}

/// Maps one row of the itinerary sheet. `day` is numeric-like upstream
/// (integer or string) and is coerced so callers can sort on it.
#[must_use]
pub fn itinerary_from_row(row: &RawRow) -> ItineraryItem {
    ItineraryItem {
        package_id: text_field(row, "packageId"),
        day: uint_field(row, "day", 0),
        title: text_field(row, "title"),
        bullets: text_field(row, "bullets"),
    }
}

/// Maps one row of the inclusions or exclusions sheet (same shape).
#[must_use]
pub fn note_from_row(row: &RawRow) -> PackageNote {
    PackageNote {
        package_id: text_field(row, "packageId"),
        item: text_field(row, "item"),
    }
}

/// Maps one row of the policies sheet. Rows with an unknown `type` are
/// dropped with a warning rather than failing the read.
#[must_use]
pub fn policy_from_row(row: &RawRow) -> Option<Policy> {
    let raw_kind = text_field(row, "type");
    let Some(kind) = PolicyKind::parse(&raw_kind) else {
        tracing::warn!(kind = %raw_kind, "skipping policy row with unknown type");
        return None;
    };
    Some(Policy {
        package_id: text_field(row, "packageId"),
        kind,
        text: text_field(row, "text"),
    })
}

/// Maps one row of the destinations sheet.
#[must_use]
pub fn destination_from_row(row: &RawRow) -> Destination {
    Destination {
        slug: text_field(row, "slug"),
        name: text_field(row, "name"),
        subtitle: text_field(row, "subtitle"),
        hero_image: text_field(row, "heroImage"),
        description: text_field(row, "description"),
        country: opt_text_field(row, "country"),
    }
}
