//! Field normalization for raw listing rows.
//!
//! Every transform is a pure per-field parser returning `Option`: a parse
//! failure degrades that one field to `None` and never aborts the run.

use crate::ingest::RawListing;
use appdash_common::{Listing, ListingKind, ListingTable};
use chrono::{Datelike, NaiveDate};

/// Date formats observed in listing exports, tried in order.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%d-%b-%y", "%Y-%m-%d"];

/// Parses an install count such as `"10,000+"`.
pub fn parse_installs(raw: &str) -> Option<u64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '+' && *c != ',')
        .collect();
    cleaned.parse::<u64>().ok()
}

/// Parses a review count. The source data mixes integer text with
/// float-typed integral text ("2000" and "2000.0").
pub fn parse_reviews(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
            Some(value as u64)
        }
        _ => None,
    }
}

/// Parses an average rating.
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a price, treating the literal words "Free"/"free" as zero and
/// stripping one leading dollar sign.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "Free" || trimmed == "free" {
        return Some(0.0);
    }
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a package size into megabytes. `M` values are megabytes, `k`
/// values are kilobytes divided by 1024; anything else ("Varies with
/// device") is undefined.
pub fn parse_size_mb(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.contains('M') {
        trimmed
            .replace('M', "")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    } else if trimmed.contains('k') {
        trimmed
            .replace('k', "")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v / 1024.0)
    } else {
        None
    }
}

/// Parses an update date in any of the supported formats.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Truncates a date to the first of its month.
pub fn month_of(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// Normalizes a single raw row into a [`Listing`].
pub fn normalize_row(raw: &RawListing) -> Listing {
    let last_updated = parse_date(&raw.last_updated);
    Listing {
        category: raw.category.to_uppercase(),
        rating: parse_rating(&raw.rating),
        reviews: parse_reviews(&raw.reviews),
        installs: parse_installs(&raw.installs),
        price: parse_price(&raw.price),
        size_mb: parse_size_mb(&raw.size),
        kind: ListingKind::parse(&raw.kind),
        last_updated,
        month: last_updated.and_then(month_of),
    }
}

/// Normalizes the whole raw table, producing a new table.
pub fn normalize_table(rows: &[RawListing]) -> ListingTable {
    rows.iter().map(normalize_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_installs_strips_markers() {
        assert_eq!(parse_installs("10,000+"), Some(10_000));
        assert_eq!(parse_installs("1,000,000+"), Some(1_000_000));
        assert_eq!(parse_installs("500"), Some(500));
        assert_eq!(parse_installs("Free"), None);
        assert_eq!(parse_installs(""), None);
        assert_eq!(parse_installs("-5"), None);
    }

    #[test]
    fn test_parse_reviews() {
        assert_eq!(parse_reviews("2000"), Some(2000));
        assert_eq!(parse_reviews("2000.0"), Some(2000));
        assert_eq!(parse_reviews("3.0M"), None);
        assert_eq!(parse_reviews("NaN"), None);
        assert_eq!(parse_reviews("12.5"), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.5"), Some(4.5));
        assert_eq!(parse_rating("19"), Some(19.0));
        assert_eq!(parse_rating("NaN"), None);
        assert_eq!(parse_rating("n/a"), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("Free"), Some(0.0));
        assert_eq!(parse_price("free"), Some(0.0));
        assert_eq!(parse_price("$4.99"), Some(4.99));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price("Everyone"), None);
    }

    #[test]
    fn test_parse_size_mb() {
        assert_eq!(parse_size_mb("19M"), Some(19.0));
        assert_eq!(parse_size_mb("8.7M"), Some(8.7));
        assert_eq!(parse_size_mb("512k"), Some(0.5));
        assert_eq!(parse_size_mb("Varies with device"), None);
        assert_eq!(parse_size_mb(""), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2018, 1, 7).unwrap();
        assert_eq!(parse_date("January 7, 2018"), Some(expected));
        assert_eq!(parse_date("7-Jan-18"), Some(expected));
        assert_eq!(parse_date("2018-01-07"), Some(expected));
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_month_truncation() {
        let date = NaiveDate::from_ymd_opt(2018, 1, 7).unwrap();
        assert_eq!(month_of(date), NaiveDate::from_ymd_opt(2018, 1, 1));
    }

    #[test]
    fn test_normalize_row() {
        let raw = crate::ingest::RawListing {
            category: "tools".to_string(),
            rating: "4.5".to_string(),
            reviews: "2000".to_string(),
            installs: "10,000+".to_string(),
            size: "15M".to_string(),
            kind: "Free".to_string(),
            price: "0".to_string(),
            last_updated: "January 7, 2018".to_string(),
        };

        let listing = normalize_row(&raw);
        assert_eq!(listing.category, "TOOLS");
        assert_eq!(listing.rating, Some(4.5));
        assert_eq!(listing.reviews, Some(2000));
        assert_eq!(listing.installs, Some(10_000));
        assert_eq!(listing.price, Some(0.0));
        assert_eq!(listing.size_mb, Some(15.0));
        assert_eq!(listing.kind, Some(appdash_common::ListingKind::Free));
        assert_eq!(listing.month, NaiveDate::from_ymd_opt(2018, 1, 1));
    }

    #[test]
    fn test_normalize_row_degrades_per_field() {
        let raw = crate::ingest::RawListing {
            category: "weather".to_string(),
            rating: "NaN".to_string(),
            reviews: "few".to_string(),
            installs: "unknown".to_string(),
            size: "Varies with device".to_string(),
            kind: "0".to_string(),
            price: "Everyone".to_string(),
            last_updated: "never".to_string(),
        };

        let listing = normalize_row(&raw);
        assert_eq!(listing.category, "WEATHER");
        assert_eq!(listing.rating, None);
        assert_eq!(listing.reviews, None);
        assert_eq!(listing.installs, None);
        assert_eq!(listing.price, None);
        assert_eq!(listing.size_mb, None);
        assert_eq!(listing.kind, None);
        assert_eq!(listing.last_updated, None);
        assert_eq!(listing.month, None);
    }
}
