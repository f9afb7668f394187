//! Configuration types for the pay package engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML rate card files, together with the built-in
//! sample rate card returned by [`EngineConfig::default`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// Metadata about the rate card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateCardMetadata {
    /// The human-readable name of the rate card.
    pub name: String,
    /// The version or effective date of the rate card.
    pub version: String,
}

impl Default for RateCardMetadata {
    fn default() -> Self {
        Self {
            name: "Travel Nurse Pay Package".to_string(),
            version: "2025-01-01".to_string(),
        }
    }
}

/// Largest value accepted for any formula constant.
pub const MAX_CONSTANT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Numeric constants used by the derivation formulas.
///
/// Every field has a default so a rate card only needs to list the values
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConstants {
    /// Multiplier approximating the fully-loaded employer cost of a W-2 dollar.
    pub burden_multiplier: Decimal,
    /// Weeks per month used for monthly figures (not calendar-accurate).
    pub weeks_per_month: Decimal,
    /// Work days per week assumed when the schedule is not supplied.
    pub default_schedule_days: Decimal,
    /// Fixed hourly rate paid for non-billable orientation.
    pub non_billable_orientation_rate: Decimal,
    /// Overtime pay multiplier applied to the regular pay rate.
    pub overtime_multiplier: Decimal,
    /// Standard full-time hours per week; stipend spreading caps at this value.
    pub standard_weekly_hours: Decimal,
    /// Hours per day above which daily overtime applies.
    pub daily_overtime_threshold: Decimal,
    /// Hours worked per hour of sick pay accrued.
    pub sick_accrual_hours: Decimal,
    /// Days per week the daily stipend is paid for.
    pub days_per_week: Decimal,
}

impl Default for EngineConstants {
    fn default() -> Self {
        Self {
            burden_multiplier: Decimal::new(123, 2),
            weeks_per_month: Decimal::new(4, 0),
            default_schedule_days: Decimal::new(5, 0),
            non_billable_orientation_rate: Decimal::new(165, 1),
            overtime_multiplier: Decimal::new(15, 1),
            standard_weekly_hours: Decimal::new(40, 0),
            daily_overtime_threshold: Decimal::new(8, 0),
            sick_accrual_hours: Decimal::new(30, 0),
            days_per_week: Decimal::new(7, 0),
        }
    }
}

impl EngineConstants {
    /// Checks that every divisor and multiplier is usable.
    ///
    /// Each constant must also be at most [`MAX_CONSTANT`].
    pub fn validate(&self) -> EngineResult<()> {
        let positive = [
            ("burden_multiplier", self.burden_multiplier),
            ("weeks_per_month", self.weeks_per_month),
            ("default_schedule_days", self.default_schedule_days),
            ("overtime_multiplier", self.overtime_multiplier),
            ("standard_weekly_hours", self.standard_weekly_hours),
            ("sick_accrual_hours", self.sick_accrual_hours),
            ("days_per_week", self.days_per_week),
        ];
        for (name, value) in positive {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConstant {
                    name: name.to_string(),
                    message: format!("must be greater than zero, got {}", value),
                });
            }
        }

        let non_negative = [
            (
                "non_billable_orientation_rate",
                self.non_billable_orientation_rate,
            ),
            ("daily_overtime_threshold", self.daily_overtime_threshold),
        ];
        for (name, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidConstant {
                    name: name.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        for (name, value) in self.named() {
            if value > MAX_CONSTANT {
                return Err(EngineError::InvalidConstant {
                    name: name.to_string(),
                    message: format!("must not exceed {}, got {}", MAX_CONSTANT, value),
                });
            }
        }

        Ok(())
    }

    /// Returns a copy with every constant clamped to `[0, MAX_CONSTANT]`.
    ///
    /// Evaluation uses this so a rate card built without
    /// [`validate`](Self::validate) still cannot overflow.
    pub fn bounded(&self) -> Self {
        let clamp = |value: Decimal| value.clamp(Decimal::ZERO, MAX_CONSTANT);
        Self {
            burden_multiplier: clamp(self.burden_multiplier),
            weeks_per_month: clamp(self.weeks_per_month),
            default_schedule_days: clamp(self.default_schedule_days),
            non_billable_orientation_rate: clamp(self.non_billable_orientation_rate),
            overtime_multiplier: clamp(self.overtime_multiplier),
            standard_weekly_hours: clamp(self.standard_weekly_hours),
            daily_overtime_threshold: clamp(self.daily_overtime_threshold),
            sick_accrual_hours: clamp(self.sick_accrual_hours),
            days_per_week: clamp(self.days_per_week),
        }
    }

    fn named(&self) -> [(&'static str, Decimal); 9] {
        [
            ("burden_multiplier", self.burden_multiplier),
            ("weeks_per_month", self.weeks_per_month),
            ("default_schedule_days", self.default_schedule_days),
            (
                "non_billable_orientation_rate",
                self.non_billable_orientation_rate,
            ),
            ("overtime_multiplier", self.overtime_multiplier),
            ("standard_weekly_hours", self.standard_weekly_hours),
            ("daily_overtime_threshold", self.daily_overtime_threshold),
            ("sick_accrual_hours", self.sick_accrual_hours),
            ("days_per_week", self.days_per_week),
        ]
    }
}

/// Client name to fee fraction mapping.
///
/// The fee is retained from the bill rate as `bill * (1 - fee)`. Clients are
/// kept in name order so selector lists are stable.
///
/// # Example
///
/// ```
/// use pay_package_engine::config::FeeSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = FeeSchedule::new().with_client("SimpliFI", Decimal::new(6, 2));
/// assert_eq!(schedule.fee_for("SimpliFI"), Some(Decimal::new(6, 2)));
/// assert_eq!(schedule.fee_for("Unknown"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeSchedule {
    fees: BTreeMap<String, Decimal>,
}

impl FeeSchedule {
    /// Creates an empty fee schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a client, returning the extended schedule.
    pub fn with_client(mut self, client: impl Into<String>, fee: Decimal) -> Self {
        self.fees.insert(client.into(), fee);
        self
    }

    /// Returns the fee for a client, if the client is known.
    pub fn fee_for(&self, client: &str) -> Option<Decimal> {
        self.fees.get(client).copied()
    }

    /// Iterates clients and their fees in name order.
    pub fn clients(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.fees.iter().map(|(name, fee)| (name.as_str(), *fee))
    }

    /// Returns the number of clients.
    pub fn len(&self) -> usize {
        self.fees.len()
    }

    /// Returns true if no clients are configured.
    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }

    /// Checks that every fee lies in `[0, 1)`.
    pub fn validate(&self) -> EngineResult<()> {
        for (client, fee) in self.clients() {
            if fee < Decimal::ZERO || fee >= Decimal::ONE {
                return Err(EngineError::InvalidFeeRate {
                    client: client.to_string(),
                    fee,
                });
            }
        }
        Ok(())
    }

    /// The sample schedule shipped with the engine.
    pub fn sample() -> Self {
        [
            ("Direct", Decimal::new(0, 2)),
            ("SimpliFI", Decimal::new(6, 2)),
            ("Apex Health", Decimal::new(35, 3)),
            ("Bayview Medical", Decimal::new(4, 2)),
            ("Cedar Valley", Decimal::new(45, 3)),
            ("Harborline", Decimal::new(5, 2)),
            ("Keystone Regional", Decimal::new(55, 3)),
            ("Lakeshore Partners", Decimal::new(3, 2)),
            ("Meridian Care", Decimal::new(65, 3)),
            ("Northgate", Decimal::new(7, 2)),
            ("Summit VMS", Decimal::new(8, 2)),
            ("Westfield Health", Decimal::new(25, 3)),
        ]
        .into_iter()
        .fold(Self::new(), |schedule, (client, fee)| {
            schedule.with_client(client, fee)
        })
    }
}

/// Clients configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientsConfig {
    /// Map of client name to fee fraction.
    pub clients: FeeSchedule,
}

/// Margin gauge settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Hourly margin considered healthy; the gauge is full at twice this value.
    pub target_margin: Decimal,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            target_margin: Decimal::new(1000, 2),
        }
    }
}

/// Currency display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Symbol placed before the amount.
    pub symbol: String,
    /// Separator inserted between groups of three integer digits.
    pub thousands_separator: String,
    /// Separator between the integer and fractional digits.
    pub decimal_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

/// Engine settings file structure (`engine.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Rate card metadata.
    pub rate_card: RateCardMetadata,
    /// Formula constants.
    pub constants: EngineConstants,
    /// Gauge settings.
    pub gauge: GaugeConfig,
    /// Currency display settings.
    pub currency: CurrencyFormat,
}

/// The complete engine configuration.
///
/// This struct aggregates everything the calculation reads besides the
/// input record itself. It is passed into the engine rather than read from
/// a global so callers can evaluate against synthetic clients.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    metadata: RateCardMetadata,
    constants: EngineConstants,
    fees: FeeSchedule,
    gauge: GaugeConfig,
    currency: CurrencyFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::sample()
    }
}

impl EngineConfig {
    /// Creates an EngineConfig from its component parts.
    pub fn new(settings: EngineSettings, fees: FeeSchedule) -> Self {
        Self {
            metadata: settings.rate_card,
            constants: settings.constants,
            fees,
            gauge: settings.gauge,
            currency: settings.currency,
        }
    }

    /// The built-in sample rate card with the twelve sample clients.
    pub fn sample() -> Self {
        Self::new(EngineSettings::default(), FeeSchedule::sample())
    }

    /// Replaces the fee schedule.
    pub fn with_fees(mut self, fees: FeeSchedule) -> Self {
        self.fees = fees;
        self
    }

    /// Replaces the formula constants.
    pub fn with_constants(mut self, constants: EngineConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Replaces the gauge settings.
    pub fn with_gauge(mut self, gauge: GaugeConfig) -> Self {
        self.gauge = gauge;
        self
    }

    /// Validates the constants, gauge target and fee schedule.
    pub fn validate(&self) -> EngineResult<()> {
        self.constants.validate()?;
        if self.gauge.target_margin <= Decimal::ZERO {
            return Err(EngineError::InvalidConstant {
                name: "target_margin".to_string(),
                message: format!(
                    "must be greater than zero, got {}",
                    self.gauge.target_margin
                ),
            });
        }
        self.fees.validate()
    }

    /// Returns the rate card metadata.
    pub fn metadata(&self) -> &RateCardMetadata {
        &self.metadata
    }

    /// Returns the formula constants.
    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    /// Returns the client fee schedule.
    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Returns the gauge settings.
    pub fn gauge(&self) -> &GaugeConfig {
        &self.gauge
    }

    /// Returns the currency display settings.
    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }
}
