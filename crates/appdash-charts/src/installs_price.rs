//! Combination chart: mean installs as bars, mean price as overlaid lines
//! on a secondary axis, split by Free/Paid within the top categories.

use crate::aggregate;
use crate::figure::Figure;
use crate::traits::ChartBuilder;
use appdash_common::{Listing, ListingKind};
use serde_json::{json, Value};

const INSTALL_FLOOR: u64 = 10_000;
const TOP_CATEGORIES: usize = 3;

pub struct InstallsVsPrice;

impl ChartBuilder for InstallsVsPrice {
    fn slug(&self) -> &'static str {
        "installs-vs-price"
    }

    fn title(&self) -> &'static str {
        "Installs vs Price"
    }

    fn build(&self, table: &[Listing]) -> Option<Figure> {
        let rows: Vec<&Listing> = table
            .iter()
            .filter(|r| r.installs.is_some_and(|v| v > INSTALL_FLOOR))
            .collect();
        if rows.is_empty() {
            return None;
        }

        let groups = aggregate::group_by_category(rows.iter().copied());
        let mut top = aggregate::top_by_total_installs(&groups, TOP_CATEGORIES);
        top.sort_unstable();

        let mut traces: Vec<Value> = Vec::new();
        for kind in [ListingKind::Free, ListingKind::Paid] {
            let mut categories: Vec<&str> = Vec::new();
            let mut installs: Vec<f64> = Vec::new();
            let mut prices: Vec<f64> = Vec::new();

            for category in &top {
                let subset: Vec<&&Listing> = groups[category]
                    .iter()
                    .filter(|r| r.kind == Some(kind))
                    .collect();
                if subset.is_empty() {
                    continue;
                }
                let mean_installs = aggregate::mean(
                    subset.iter().filter_map(|r| r.installs.map(|v| v as f64)),
                )
                .unwrap_or(0.0);
                categories.push(*category);
                installs.push(mean_installs);
                prices.push(
                    aggregate::mean(subset.iter().filter_map(|r| r.price)).unwrap_or(0.0),
                );
            }

            if categories.is_empty() {
                continue;
            }
            traces.push(json!({
                "type": "bar",
                "name": format!("{kind} Installs"),
                "x": categories,
                "y": installs,
            }));
            traces.push(json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": format!("{kind} Price"),
                "x": categories,
                "y": prices,
                "yaxis": "y2",
            }));
        }

        let layout = json!({
            "title": {"text": self.title()},
            "yaxis": {"title": {"text": "Installs"}},
            "yaxis2": {"title": {"text": "Price"}, "overlaying": "y", "side": "right"},
        });
        Some(Figure::new(traces, layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, installs: u64, price: f64, kind: ListingKind) -> Listing {
        Listing {
            category: category.to_string(),
            rating: None,
            reviews: None,
            installs: Some(installs),
            price: Some(price),
            size_mb: None,
            kind: Some(kind),
            last_updated: None,
            month: None,
        }
    }

    #[test]
    fn test_restricts_to_top_three_categories() {
        let table = vec![
            row("A", 100_000, 0.0, ListingKind::Free),
            row("B", 90_000, 0.0, ListingKind::Free),
            row("C", 80_000, 0.0, ListingKind::Free),
            row("D", 70_000, 0.0, ListingKind::Free),
        ];

        let figure = InstallsVsPrice.build(&table).expect("figure");
        let free_bars = &figure.traces()[0];
        let x = free_bars["x"].as_array().expect("x values");
        assert_eq!(x.len(), 3);
        assert!(!x.iter().any(|v| v == "D"));
    }

    #[test]
    fn test_low_install_rows_are_excluded() {
        let table = vec![row("A", 10_000, 0.0, ListingKind::Free)];
        assert!(InstallsVsPrice.build(&table).is_none());
    }

    #[test]
    fn test_price_series_sits_on_secondary_axis() {
        let table = vec![
            row("A", 50_000, 2.0, ListingKind::Paid),
            row("A", 70_000, 4.0, ListingKind::Paid),
        ];

        let figure = InstallsVsPrice.build(&table).expect("figure");
        // Only the Paid pair is present: bars then the price line.
        assert_eq!(figure.traces().len(), 2);
        assert_eq!(figure.traces()[1]["yaxis"], "y2");
        assert_eq!(figure.traces()[1]["y"].as_array().expect("prices")[0], 3.0);
        assert_eq!(figure.traces()[0]["y"].as_array().expect("installs")[0], 60_000.0);
    }
}
