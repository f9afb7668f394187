//! Presentation of engine results.
//!
//! This module formats figures for display and reads the margin gauge. It
//! never changes the values it renders.

mod currency;
mod display;
mod gauge;

pub use currency::{format_currency, format_number};
pub use display::display_fields;
pub use gauge::{GaugeColor, GaugeReading, GaugeState, read_gauge};
