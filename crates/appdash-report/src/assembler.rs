//! HTML report assembly and output.
//!
//! The page is self-contained apart from one external charting script
//! loaded from its CDN. Each slot contributes a heading plus either the
//! rendered figure, a "no data" note, or a locked placeholder stating the
//! slot's reveal window.

use crate::gate::{RevealGate, SlotState};
use crate::slots::ChartSlot;
use appdash_common::{utils, AppDashError, Listing, Result};
use chrono::{DateTime, TimeZone};
use std::path::Path;
use tracing::{debug, info, warn};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const PAGE_CSS: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
margin: 0; padding: 20px; background: #f5f5f5; }\n\
h1 { text-align: center; color: #333; }\n\
.generated-at { text-align: center; color: #666; }\n\
h2 { color: #333; margin-top: 32px; }\n\
.chart-panel { background: white; border-radius: 8px; \
box-shadow: 0 2px 4px rgba(0,0,0,0.1); min-height: 450px; }\n\
.no-data { color: #666; font-style: italic; }\n\
.locked-panel { padding: 40px; border: 2px dashed #d9534f; \
border-radius: 8px; text-align: center; color: #333; background: white; }\n";

/// Renders the complete report document.
///
/// The gate is evaluated once per slot against the single `generated_at`
/// clock reading, so a run straddling a window boundary stays consistent.
pub fn render_report<Tz: TimeZone>(
    slots: &[ChartSlot],
    gate: &RevealGate,
    table: &[Listing],
    generated_at: &DateTime<Tz>,
    page_title: &str,
) -> Result<String>
where
    Tz::Offset: std::fmt::Display,
{
    let now = generated_at.time();
    let tz_label = generated_at.format("%Z").to_string();

    let mut body = String::new();
    for slot in slots {
        body.push_str(&format!(
            "<h2>{}</h2>\n",
            utils::escape_html(slot.builder.title())
        ));
        match gate.evaluate(&slot.window, now) {
            SlotState::Unlocked => match slot.builder.build(table) {
                Some(figure) => {
                    let div_id = format!("chart-{}", slot.builder.slug());
                    body.push_str(&figure.to_html_fragment(&div_id)?);
                    debug!("Rendered chart '{}'", slot.builder.slug());
                }
                None => {
                    debug!("Chart '{}' produced no data", slot.builder.slug());
                    body.push_str("<p class=\"no-data\">No data available</p>\n");
                }
            },
            SlotState::Locked => {
                body.push_str(&format!(
                    "<div class=\"locked-panel\">&#128274; Available between <b>{}</b> and <b>{}</b> {}</div>\n",
                    slot.window.start.format("%H:%M"),
                    slot.window.end.format("%H:%M"),
                    utils::escape_html(&tz_label),
                ));
            }
        }
    }

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <script src=\"{cdn}\"></script>\n\
         <style>\n{css}</style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <p class=\"generated-at\">Generated at {timestamp}</p>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = utils::escape_html(page_title),
        cdn = PLOTLY_CDN,
        css = PAGE_CSS,
        timestamp = utils::format_timestamp(generated_at),
        body = body,
    ))
}

/// Writes the document to `path`, overwriting any previous run's output.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).map_err(|err| {
        AppDashError::report_with_source(format!("cannot write {}", path.display()), err)
    })?;
    info!("Report written to {}", path.display());
    Ok(())
}

/// Opens the written report in the platform's default viewer. Failure to
/// launch a viewer is logged and otherwise ignored.
pub fn open_in_viewer(path: &Path) {
    #[cfg(target_os = "macos")]
    let spawned = std::process::Command::new("open").arg(path).spawn();
    #[cfg(target_os = "windows")]
    let spawned = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn();
    #[cfg(all(unix, not(target_os = "macos")))]
    let spawned = std::process::Command::new("xdg-open").arg(path).spawn();

    match spawned {
        Ok(_) => info!("Opened {} in the system viewer", path.display()),
        Err(err) => warn!("Could not open a viewer for {}: {}", path.display(), err),
    }
}
