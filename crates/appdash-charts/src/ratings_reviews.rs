//! Grouped bar chart of mean rating and summed reviews per category.

use crate::aggregate;
use crate::figure::Figure;
use crate::traits::ChartBuilder;
use appdash_common::Listing;
use serde_json::json;

/// Top categories by review volume among highly rated, sizeable listings.
pub struct RatingsVsReviews;

impl ChartBuilder for RatingsVsReviews {
    fn slug(&self) -> &'static str {
        "ratings-vs-reviews"
    }

    fn title(&self) -> &'static str {
        "Ratings vs Reviews"
    }

    fn build(&self, table: &[Listing]) -> Option<Figure> {
        let rows: Vec<&Listing> = table
            .iter()
            .filter(|r| {
                r.rating.is_some_and(|v| v >= 4.0) && r.size_mb.is_some_and(|v| v >= 10.0)
            })
            .collect();
        if rows.is_empty() {
            return None;
        }

        let groups = aggregate::group_by_category(rows.iter().copied());
        let mut stats: Vec<(&str, f64, u64)> = groups
            .iter()
            .map(|(category, rows)| {
                let rating = aggregate::mean(rows.iter().filter_map(|r| r.rating)).unwrap_or(0.0);
                let reviews: u64 = rows.iter().filter_map(|r| r.reviews).sum();
                (*category, rating, reviews)
            })
            .collect();
        stats.sort_by(|a, b| b.2.cmp(&a.2));
        stats.truncate(10);

        let categories: Vec<&str> = stats.iter().map(|(c, _, _)| *c).collect();
        let ratings: Vec<f64> = stats.iter().map(|(_, r, _)| *r).collect();
        let reviews: Vec<u64> = stats.iter().map(|(_, _, v)| *v).collect();

        let traces = vec![
            json!({"type": "bar", "name": "Rating", "x": categories, "y": ratings}),
            json!({"type": "bar", "name": "Reviews", "x": categories, "y": reviews}),
        ];
        let layout = json!({
            "title": {"text": self.title()},
            "barmode": "group",
            "xaxis": {"title": {"text": "Category"}},
            "yaxis": {"title": {"text": "Value"}},
        });
        Some(Figure::new(traces, layout))
    }
}
