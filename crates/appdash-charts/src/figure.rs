//! Chart figure model and HTML fragment emission.
//!
//! A [`Figure`] holds the trace, layout, and optional animation-frame JSON
//! that the page's charting script consumes. The report page loads that
//! script once from its CDN; each figure contributes a `div` plus one
//! `Plotly.newPlot` call.

use appdash_common::Result;
use serde_json::Value;

/// One built chart: traces, layout, and optional animation frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    traces: Vec<Value>,
    layout: Value,
    frames: Vec<Value>,
}

impl Figure {
    /// Creates a figure from traces and a layout.
    pub fn new(traces: Vec<Value>, layout: Value) -> Self {
        Self {
            traces,
            layout,
            frames: Vec::new(),
        }
    }

    /// Attaches animation frames to the figure.
    pub fn with_frames(mut self, frames: Vec<Value>) -> Self {
        self.frames = frames;
        self
    }

    /// The trace JSON values.
    pub fn traces(&self) -> &[Value] {
        &self.traces
    }

    /// The layout JSON value.
    pub fn layout(&self) -> &Value {
        &self.layout
    }

    /// The animation frame JSON values.
    pub fn frames(&self) -> &[Value] {
        &self.frames
    }

    /// Renders the figure as an HTML fragment: a target `div` and the
    /// script call that hands the JSON to the charting library.
    pub fn to_html_fragment(&self, div_id: &str) -> Result<String> {
        let traces = serde_json::to_string(&self.traces)?;
        let layout = serde_json::to_string(&self.layout)?;

        let mut fragment = format!(
            "<div id=\"{div_id}\" class=\"chart-panel\"></div>\n<script>\n"
        );
        if self.frames.is_empty() {
            fragment.push_str(&format!(
                "Plotly.newPlot(\"{div_id}\", {traces}, {layout}, {{\"responsive\": true}});\n"
            ));
        } else {
            let frames = serde_json::to_string(&self.frames)?;
            fragment.push_str(&format!(
                "Plotly.newPlot(\"{div_id}\", {traces}, {layout}, {{\"responsive\": true}})\n\
                 .then(function (gd) {{ Plotly.addFrames(gd, {frames}); }});\n"
            ));
        }
        fragment.push_str("</script>\n");
        Ok(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fragment_contains_div_and_plot_call() {
        let figure = Figure::new(
            vec![json!({"type": "bar", "x": ["A"], "y": [1]})],
            json!({"title": {"text": "Test"}}),
        );

        let html = figure.to_html_fragment("chart-test").expect("renders");
        assert!(html.contains("id=\"chart-test\""));
        assert!(html.contains("Plotly.newPlot(\"chart-test\""));
        assert!(!html.contains("addFrames"));
    }

    #[test]
    fn test_fragment_with_frames_adds_them() {
        let figure = Figure::new(
            vec![json!({"type": "choropleth", "locations": ["India"], "z": [1]})],
            json!({}),
        )
        .with_frames(vec![json!({"name": "TOOLS", "data": []})]);

        let html = figure.to_html_fragment("chart-map").expect("renders");
        assert!(html.contains("addFrames"));
        assert!(html.contains("TOOLS"));
    }

    #[test]
    fn test_figure_equality_tracks_underlying_data() {
        let make = || {
            Figure::new(
                vec![json!({"type": "bar", "x": ["A"], "y": [2]})],
                json!({"title": {"text": "Same"}}),
            )
        };
        assert_eq!(make(), make());
    }
}
