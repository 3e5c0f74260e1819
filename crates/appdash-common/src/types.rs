//! Core data model shared across the appdash crates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A normalized listing table, handed immutably to every chart builder.
pub type ListingTable = Vec<Listing>;

/// Whether a listing is distributed free of charge or paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListingKind {
    Free,
    Paid,
}

impl ListingKind {
    /// Parse the raw `Type` column value. Anything other than the two
    /// known labels is treated as missing.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "Free" => Some(Self::Free),
            "Paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// One normalized application listing.
///
/// Every numeric and temporal field is either a parsed value or `None`;
/// raw unparsed strings never travel past normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Uppercased category label, kept verbatim otherwise.
    pub category: String,
    /// Average user rating.
    pub rating: Option<f64>,
    /// Total review count.
    pub reviews: Option<u64>,
    /// Cumulative install count.
    pub installs: Option<u64>,
    /// Price in dollars; 0.0 for free listings.
    pub price: Option<f64>,
    /// Package size in megabytes.
    pub size_mb: Option<f64>,
    /// Free/Paid distribution kind.
    pub kind: Option<ListingKind>,
    /// Date of the most recent update.
    pub last_updated: Option<NaiveDate>,
    /// First-of-month truncation of `last_updated`.
    pub month: Option<NaiveDate>,
}
