//! Margin gauge.
//!
//! The gauge treats the target margin as the midpoint and twice the target
//! as full scale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format_currency;
use crate::calculation::ratio_or_zero;
use crate::config::{CurrencyFormat, GaugeConfig};

/// Textual state of the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeState {
    /// Nothing entered yet: zero margin and zero bill rate.
    NoInput,
    /// Margin below zero.
    Negative,
    /// Margin at least zero but under the target.
    BelowTarget,
    /// Margin at or above the target.
    Healthy,
}

/// Display color of the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeColor {
    /// Margin at or above the target.
    Green,
    /// Positive margin under the target.
    Amber,
    /// Zero or negative margin.
    Red,
}

impl GaugeColor {
    /// Returns the color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GaugeColor::Green => "green",
            GaugeColor::Amber => "amber",
            GaugeColor::Red => "red",
        }
    }
}

/// A reading of the margin gauge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeReading {
    /// Classified state.
    pub state: GaugeState,
    /// Margin per hour as currency, e.g. `$1.72/hr`.
    pub value_text: String,
    /// Advisory message for the state.
    pub message: String,
    /// Fill fraction in `[0, 1]`.
    pub progress_fraction: Decimal,
    /// Display color.
    pub color: GaugeColor,
}

/// Reads the gauge for an hourly margin.
///
/// # Examples
///
/// ```
/// use pay_package_engine::config::{CurrencyFormat, GaugeConfig};
/// use pay_package_engine::presentation::{read_gauge, GaugeColor, GaugeState};
/// use rust_decimal::Decimal;
///
/// let reading = read_gauge(
///     Decimal::new(15, 0),
///     Decimal::new(60, 0),
///     &GaugeConfig::default(),
///     &CurrencyFormat::default(),
/// );
///
/// assert_eq!(reading.state, GaugeState::Healthy);
/// assert_eq!(reading.color, GaugeColor::Green);
/// assert_eq!(reading.progress_fraction, Decimal::new(75, 2));
/// ```
pub fn read_gauge(
    margin: Decimal,
    bill_regular: Decimal,
    gauge: &GaugeConfig,
    currency: &CurrencyFormat,
) -> GaugeReading {
    let target = gauge.target_margin;

    let state = if margin == Decimal::ZERO && bill_regular == Decimal::ZERO {
        GaugeState::NoInput
    } else if margin < Decimal::ZERO {
        GaugeState::Negative
    } else if margin < target {
        GaugeState::BelowTarget
    } else {
        GaugeState::Healthy
    };

    let color = if margin >= target {
        GaugeColor::Green
    } else if margin > Decimal::ZERO {
        GaugeColor::Amber
    } else {
        GaugeColor::Red
    };

    let full_scale = target.saturating_mul(Decimal::TWO);
    let progress_fraction = if full_scale > Decimal::ZERO {
        ratio_or_zero(margin, full_scale).clamp(Decimal::ZERO, Decimal::ONE)
    } else if margin > Decimal::ZERO {
        Decimal::ONE
    } else {
        Decimal::ZERO
    };

    let target_text = format_currency(target, currency);
    let message = match state {
        GaugeState::NoInput => "Enter bill and pay rates to see margin".to_string(),
        GaugeState::Negative => "Negative margin: this package loses money".to_string(),
        GaugeState::BelowTarget => format!("Below the {}/hr target margin", target_text),
        GaugeState::Healthy => format!("At or above the {}/hr target margin", target_text),
    };

    GaugeReading {
        state,
        value_text: format!("{}/hr", format_currency(margin, currency)),
        message,
        progress_fraction,
        color,
    }
}
