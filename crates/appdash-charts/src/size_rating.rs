//! Scatter plot of package size against rating, bubble size scaled by
//! install count, one series per category.

use crate::figure::Figure;
use crate::traits::ChartBuilder;
use appdash_common::Listing;
use serde_json::{json, Value};
use std::collections::BTreeMap;

const INSTALL_FLOOR: u64 = 50_000;
const REVIEW_FLOOR: u64 = 500;
/// Largest bubble diameter in pixels; drives the marker size reference.
const MAX_BUBBLE_PX: f64 = 40.0;

pub struct SizeVsRating;

impl ChartBuilder for SizeVsRating {
    fn slug(&self) -> &'static str {
        "size-vs-rating"
    }

    fn title(&self) -> &'static str {
        "Size vs Rating"
    }

    fn build(&self, table: &[Listing]) -> Option<Figure> {
        let mut points: BTreeMap<&str, Vec<(f64, f64, u64)>> = BTreeMap::new();
        for row in table.iter().filter(|r| {
            r.installs.is_some_and(|v| v > INSTALL_FLOOR)
                && r.reviews.is_some_and(|v| v > REVIEW_FLOOR)
        }) {
            if let (Some(size), Some(rating), Some(installs)) =
                (row.size_mb, row.rating, row.installs)
            {
                points
                    .entry(row.category.as_str())
                    .or_default()
                    .push((size, rating, installs));
            }
        }
        if points.is_empty() {
            return None;
        }

        let max_installs = points
            .values()
            .flatten()
            .map(|(_, _, installs)| *installs)
            .max()
            .unwrap_or(1)
            .max(1);
        let sizeref = 2.0 * max_installs as f64 / MAX_BUBBLE_PX.powi(2);

        let traces: Vec<Value> = points
            .iter()
            .map(|(category, values)| {
                let sizes: Vec<f64> = values.iter().map(|(s, _, _)| *s).collect();
                let ratings: Vec<f64> = values.iter().map(|(_, r, _)| *r).collect();
                let installs: Vec<u64> = values.iter().map(|(_, _, i)| *i).collect();
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": category,
                    "x": sizes,
                    "y": ratings,
                    "marker": {
                        "size": installs,
                        "sizemode": "area",
                        "sizeref": sizeref,
                        "sizemin": 4,
                    },
                })
            })
            .collect();

        let layout = json!({
            "title": {"text": self.title()},
            "xaxis": {"title": {"text": "Size (MB)"}},
            "yaxis": {"title": {"text": "Rating"}},
        });
        Some(Figure::new(traces, layout))
    }
}
