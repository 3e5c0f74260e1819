//! Chart slot descriptors pairing each builder with its reveal window.

use crate::gate::{self, RevealWindow, REVEAL_SCHEDULE};
use appdash_charts::{builders, ChartBuilder};
use appdash_common::{AppDashError, Result};

/// One report slot: a chart builder and the window it unlocks in.
/// Descriptors are built once per run and never mutated.
pub struct ChartSlot {
    pub builder: Box<dyn ChartBuilder>,
    pub window: RevealWindow,
}

/// Builds the six slots in fixed report order, validating the schedule.
pub fn reveal_slots() -> Result<Vec<ChartSlot>> {
    gate::validate_schedule(&*REVEAL_SCHEDULE)?;

    let builders = builders();
    if builders.len() != REVEAL_SCHEDULE.len() {
        return Err(AppDashError::validation(format!(
            "schedule has {} windows for {} charts",
            REVEAL_SCHEDULE.len(),
            builders.len()
        )));
    }

    Ok(builders
        .into_iter()
        .zip(REVEAL_SCHEDULE.iter().copied())
        .map(|(builder, window)| ChartSlot { builder, window })
        .collect())
}
