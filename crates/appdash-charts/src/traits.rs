//! Chart builder trait definition for polymorphic chart types.

use crate::figure::Figure;
use appdash_common::Listing;

/// Trait for chart builders evaluated uniformly by the report pipeline.
///
/// Builders are pure: the same table always produces the same figure, and
/// an empty filtered result yields `None` rather than an empty chart.
pub trait ChartBuilder: Send + Sync {
    /// Stable identifier, used for the chart's DOM element id.
    fn slug(&self) -> &'static str;

    /// Human-readable chart title.
    fn title(&self) -> &'static str;

    /// Builds the figure from the normalized table, or signals "no data".
    fn build(&self, table: &[Listing]) -> Option<Figure>;
}
