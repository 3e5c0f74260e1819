//! appdash - time-gated analytics report generator

use anyhow::Result;
use appdash_common::logging::{init_logging, LoggingConfig};
use appdash_config::Config;
use appdash_report::pipeline;
use tracing::{error, info};

fn main() -> Result<()> {
    let config = Config::default();

    init_logging(LoggingConfig {
        level: config.logging.level.clone(),
        pretty_format: config.logging.colored,
        file_path: config.logging.file.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;

    info!("Starting appdash report generation");

    if let Err(err) = config.validate() {
        error!("Invalid configuration: {err}");
        std::process::exit(1);
    }

    match pipeline::run(&config) {
        Ok(path) => {
            info!("Time-based report ready: {}", path.display());
            Ok(())
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            std::process::exit(1);
        }
    }
}
