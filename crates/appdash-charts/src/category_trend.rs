//! Multi-line time series of monthly installs per category for listings
//! with meaningful review volume.

use crate::aggregate;
use crate::figure::Figure;
use crate::traits::ChartBuilder;
use appdash_common::Listing;
use serde_json::{json, Value};

const REVIEW_FLOOR: u64 = 500;

pub struct CategoryTrend;

impl ChartBuilder for CategoryTrend {
    fn slug(&self) -> &'static str {
        "category-trend"
    }

    fn title(&self) -> &'static str {
        "Category Trend"
    }

    fn build(&self, table: &[Listing]) -> Option<Figure> {
        let rows = table
            .iter()
            .filter(|r| r.reviews.is_some_and(|v| v > REVIEW_FLOOR));
        let series = aggregate::monthly_installs_by_category(rows);
        if series.is_empty() {
            return None;
        }

        let traces: Vec<Value> = series
            .iter()
            .map(|(category, points)| {
                let months: Vec<String> = points
                    .keys()
                    .map(|month| month.format("%Y-%m-%d").to_string())
                    .collect();
                let installs: Vec<u64> = points.values().copied().collect();
                json!({
                    "type": "scatter",
                    "mode": "lines",
                    "name": category,
                    "x": months,
                    "y": installs,
                })
            })
            .collect();

        let layout = json!({
            "title": {"text": self.title()},
            "xaxis": {"title": {"text": "Month"}, "type": "date"},
            "yaxis": {"title": {"text": "Installs"}},
        });
        Some(Figure::new(traces, layout))
    }
}
