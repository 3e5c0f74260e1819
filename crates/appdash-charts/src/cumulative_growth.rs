//! Stacked area time series of monthly installs for well-reviewed,
//! highly rated listings.

use crate::aggregate;
use crate::figure::Figure;
use crate::traits::ChartBuilder;
use appdash_common::Listing;
use serde_json::{json, Value};

const RATING_FLOOR: f64 = 4.2;
const REVIEW_FLOOR: u64 = 1_000;

pub struct CumulativeGrowth;

impl ChartBuilder for CumulativeGrowth {
    fn slug(&self) -> &'static str {
        "cumulative-growth"
    }

    fn title(&self) -> &'static str {
        "Cumulative Growth"
    }

    fn build(&self, table: &[Listing]) -> Option<Figure> {
        let rows = table.iter().filter(|r| {
            r.rating.is_some_and(|v| v >= RATING_FLOOR)
                && r.reviews.is_some_and(|v| v > REVIEW_FLOOR)
        });
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
                    "stackgroup": "one",
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(category: &str, rating: f64, reviews: u64, installs: u64, month: (i32, u32)) -> Listing {
        Listing {
            category: category.to_string(),
            rating: Some(rating),
            reviews: Some(reviews),
            installs: Some(installs),
            price: None,
            size_mb: None,
            kind: None,
            last_updated: None,
            month: NaiveDate::from_ymd_opt(month.0, month.1, 1),
        }
    }

    #[test]
    fn test_sums_installs_per_month_and_category() {
        let table = vec![
            row("TOOLS", 4.5, 2_000, 100, (2018, 1)),
            row("TOOLS", 4.3, 1_500, 50, (2018, 1)),
            row("TOOLS", 4.9, 3_000, 25, (2018, 2)),
        ];

        let figure = CumulativeGrowth.build(&table).expect("figure");
        assert_eq!(figure.traces().len(), 1);
        let y = figure.traces()[0]["y"].as_array().expect("installs");
        assert_eq!(y[0], 150);
        assert_eq!(y[1], 25);
        assert_eq!(figure.traces()[0]["stackgroup"], "one");
    }

    #[test]
    fn test_filter_bounds() {
        // Rating below 4.2 and reviews at exactly 1000 are both excluded.
        let table = vec![
            row("TOOLS", 4.1, 5_000, 100, (2018, 1)),
            row("GAME", 4.5, 1_000, 100, (2018, 1)),
        ];
        assert!(CumulativeGrowth.build(&table).is_none());

        // Rating of exactly 4.2 is included.
        let table = vec![row("TOOLS", 4.2, 1_001, 100, (2018, 1))];
        assert!(CumulativeGrowth.build(&table).is_some());
    }

    #[test]
    fn test_rows_without_month_produce_no_data() {
        let mut listing = row("TOOLS", 4.5, 2_000, 100, (2018, 1));
        listing.month = None;
        assert!(CumulativeGrowth.build(&[listing]).is_none());
    }
}
