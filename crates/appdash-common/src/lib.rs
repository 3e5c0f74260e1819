//! Shared types, utilities, and common functionality for appdash.

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use error::{AppDashError, Result};
pub use types::{Listing, ListingKind, ListingTable};
