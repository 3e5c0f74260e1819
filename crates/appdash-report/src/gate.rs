//! Reveal-window time gate.
//!
//! Each chart slot is either `Locked` or `Unlocked`, recomputed from
//! scratch on every run: a slot unlocks when the evaluation time falls
//! inside its window (inclusive at both bounds) or when the global bypass
//! is set. Nothing is persisted between runs.

use appdash_common::AppDashError;
use chrono::NaiveTime;
use once_cell::sync::Lazy;

/// Number of chart slots in the report.
pub const SLOT_COUNT: usize = 6;

/// An inclusive `[start, end]` wall-clock window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl RevealWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether `time` falls inside the window, bounds included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Gate decision for one chart slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Locked,
    Unlocked,
}

impl SlotState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

/// The static reveal schedule: six contiguous one-hour windows covering
/// 13:00 through 19:00 local time.
pub static REVEAL_SCHEDULE: Lazy<[RevealWindow; SLOT_COUNT]> = Lazy::new(|| {
    let hour = |h| NaiveTime::from_hms_opt(h, 0, 0).expect("literal hour is in range");
    [
        RevealWindow::new(hour(13), hour(14)),
        RevealWindow::new(hour(14), hour(15)),
        RevealWindow::new(hour(15), hour(16)),
        RevealWindow::new(hour(16), hour(17)),
        RevealWindow::new(hour(17), hour(18)),
        RevealWindow::new(hour(18), hour(19)),
    ]
});

/// Evaluates slot states against the clock, honoring the global bypass.
#[derive(Debug, Clone, Copy)]
pub struct RevealGate {
    ignore_windows: bool,
}

impl RevealGate {
    pub fn new(ignore_windows: bool) -> Self {
        Self { ignore_windows }
    }

    /// Computes the state of one slot at `now`.
    pub fn evaluate(&self, window: &RevealWindow, now: NaiveTime) -> SlotState {
        if self.ignore_windows || window.contains(now) {
            SlotState::Unlocked
        } else {
            SlotState::Locked
        }
    }
}

/// Validates that every window is well-formed and that consecutive
/// windows are contiguous.
pub fn validate_schedule(windows: &[RevealWindow]) -> Result<(), AppDashError> {
    for window in windows {
        if window.start > window.end {
            return Err(AppDashError::validation_field(
                format!(
                    "window ends before it starts: {} > {}",
                    window.start.format("%H:%M"),
                    window.end.format("%H:%M")
                ),
                "reveal.schedule",
            ));
        }
    }
    for pair in windows.windows(2) {
        if pair[0].end != pair[1].start {
            return Err(AppDashError::validation_field(
                format!(
                    "windows are not contiguous: {} then {}",
                    pair[0].end.format("%H:%M"),
                    pair[1].start.format("%H:%M")
                ),
                "reveal.schedule",
            ));
        }
    }
    Ok(())
}
