//! Typed configuration for the appdash report generator.
//!
//! There is deliberately no file loader, no environment lookup, and no CLI
//! surface here: the binary runs from `Config::default()` and the single
//! behavioral switch (the reveal-window bypass) is an ordinary field that
//! callers thread into the pipeline.

pub mod defaults;
pub mod schema;

pub use schema::{Config, DataConfig, LoggingSettings, ReportConfig, RevealConfig};
