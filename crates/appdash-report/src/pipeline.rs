//! Sequential report pipeline: ingest, normalize, gate, assemble, write.

use crate::assembler;
use crate::gate::RevealGate;
use crate::slots;
use appdash_charts::{ingest, normalize};
use appdash_common::Result;
use appdash_config::Config;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;
use tracing::info;

/// Runs the full pipeline against the current wall clock.
pub fn run(config: &Config) -> Result<PathBuf> {
    let timezone = config.reveal.parsed_timezone()?;
    let now = Utc::now().with_timezone(&timezone);
    run_at(config, now)
}

/// Runs the full pipeline with an injected clock reading. The clock is
/// read exactly once; every slot is gated against the same instant.
pub fn run_at(config: &Config, now: DateTime<Tz>) -> Result<PathBuf> {
    info!("Current {} time: {}", config.reveal.timezone, now.format("%H:%M:%S"));

    let raw = ingest::read_listings(&config.data.input_path)?;
    let table = normalize::normalize_table(&raw);
    info!("Normalized {} listings", table.len());

    let slots = slots::reveal_slots()?;
    let gate = RevealGate::new(config.reveal.ignore_windows);

    let html = assembler::render_report(
        &slots,
        &gate,
        &table,
        &now,
        &config.report.page_title,
    )?;
    assembler::write_report(&config.report.output_path, &html)?;

    if config.report.open_viewer {
        assembler::open_in_viewer(&config.report.output_path);
    }

    Ok(config.report.output_path.clone())
}
