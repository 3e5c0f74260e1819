//! Report assembly for appdash: the reveal-window time gate, the slot
//! schedule, the HTML assembler, and the sequential pipeline tying the
//! stages together.

pub mod assembler;
pub mod gate;
pub mod pipeline;
pub mod slots;

pub use gate::{RevealGate, RevealWindow, SlotState};
pub use slots::ChartSlot;
