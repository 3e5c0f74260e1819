//! Single-country choropleth with one animation frame per top category.
//!
//! The source data carries no per-row geography, so every listing is
//! attributed to one constant country and the map colors that country by
//! the active category's summed installs.

use crate::aggregate;
use crate::figure::Figure;
use crate::traits::ChartBuilder;
use appdash_common::Listing;
use serde_json::{json, Value};

const COUNTRY: &str = "India";
const TOP_CATEGORIES: usize = 5;

pub struct CategoryMap;

impl CategoryMap {
    fn frame_trace(total: u64, scale_max: u64) -> Value {
        json!({
            "type": "choropleth",
            "locations": [COUNTRY],
            "locationmode": "country names",
            "z": [total],
            "zmin": 0,
            "zmax": scale_max,
            "colorbar": {"title": {"text": "Installs"}},
        })
    }
}

impl ChartBuilder for CategoryMap {
    fn slug(&self) -> &'static str {
        "installs-by-category-map"
    }

    fn title(&self) -> &'static str {
        "Installs by Category (India)"
    }

    fn build(&self, table: &[Listing]) -> Option<Figure> {
        let groups = aggregate::group_by_category(table.iter());
        let top = aggregate::top_by_total_installs(&groups, TOP_CATEGORIES);
        if top.is_empty() {
            return None;
        }

        let totals: Vec<(&str, u64)> = top
            .iter()
            .map(|category| (*category, aggregate::total_installs(&groups[category])))
            .collect();
        let scale_max = totals.iter().map(|(_, t)| *t).max().unwrap_or(0);

        let frames: Vec<Value> = totals
            .iter()
            .map(|(category, total)| {
                json!({
                    "name": category,
                    "data": [Self::frame_trace(*total, scale_max)],
                })
            })
            .collect();

        let steps: Vec<Value> = totals
            .iter()
            .map(|(category, _)| {
                json!({
                    "label": category,
                    "method": "animate",
                    "args": [[category], {
                        "mode": "immediate",
                        "frame": {"duration": 300, "redraw": true},
                        "transition": {"duration": 0},
                    }],
                })
            })
            .collect();

        let traces = vec![Self::frame_trace(totals[0].1, scale_max)];
        let layout = json!({
            "title": {"text": self.title()},
            "sliders": [{"active": 0, "currentvalue": {"prefix": "Category: "}, "steps": steps}],
            "updatemenus": [{
                "type": "buttons",
                "showactive": false,
                "buttons": [
                    {
                        "label": "Play",
                        "method": "animate",
                        "args": [null, {"frame": {"duration": 700, "redraw": true}, "fromcurrent": true}],
                    },
                    {
                        "label": "Pause",
                        "method": "animate",
                        "args": [[null], {"mode": "immediate"}],
                    },
                ],
            }],
        });

        Some(Figure::new(traces, layout).with_frames(frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, installs: Option<u64>) -> Listing {
        Listing {
            category: category.to_string(),
            rating: None,
            reviews: None,
            installs,
            price: None,
            size_mb: None,
            kind: None,
            last_updated: None,
            month: None,
        }
    }

    #[test]
    fn test_one_frame_per_top_category() {
        let table: Vec<Listing> = (0..7)
            .map(|i| row(&format!("CAT{i}"), Some((i as u64 + 1) * 10)))
            .collect();

        let figure = CategoryMap.build(&table).expect("figure");
        assert_eq!(figure.frames().len(), 5);
        // Frames are ordered by descending installs.
        assert_eq!(figure.frames()[0]["name"], "CAT6");
        assert_eq!(figure.frames()[4]["name"], "CAT2");
    }

    #[test]
    fn test_every_frame_targets_the_constant_country() {
        let table = vec![row("TOOLS", Some(100)), row("GAME", Some(50))];

        let figure = CategoryMap.build(&table).expect("figure");
        for frame in figure.frames() {
            assert_eq!(frame["data"][0]["locations"][0], "India");
        }
        assert_eq!(figure.traces()[0]["locationmode"], "country names");
    }

    #[test]
    fn test_frames_color_by_summed_installs() {
        let table = vec![
            row("TOOLS", Some(100)),
            row("TOOLS", Some(150)),
            row("GAME", Some(50)),
        ];

        let figure = CategoryMap.build(&table).expect("figure");
        assert_eq!(figure.frames()[0]["name"], "TOOLS");
        assert_eq!(figure.frames()[0]["data"][0]["z"][0], 250);
    }

    #[test]
    fn test_empty_table_signals_no_data() {
        assert!(CategoryMap.build(&[]).is_none());
    }
}
