//! The flat display-field map a form renders.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::{format_currency, format_number};
use crate::config::CurrencyFormat;
use crate::models::{Granular, PackageResult};

/// Renders every output of a result as a named display string.
///
/// Money is formatted as currency, hours as plain numbers, and the fee as a
/// percentage. Keys are the snake_case output field names.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::compute;
/// use pay_package_engine::config::EngineConfig;
/// use pay_package_engine::models::PackageInput;
/// use pay_package_engine::presentation::display_fields;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::sample();
/// let input = PackageInput {
///     client: "Direct".to_string(),
///     bill_regular: Decimal::new(60, 0),
///     pay_regular: Decimal::new(40, 0),
///     hours_regular: Decimal::new(40, 0),
///     contract_weeks: Decimal::new(13, 0),
///     ..PackageInput::default()
/// };
/// let fields = display_fields(&compute(&input, &config), config.currency());
///
/// assert_eq!(fields["hr_after_fee"], "$60.00");
/// assert_eq!(fields["billing_contract"], "$31,200.00");
/// ```
pub fn display_fields(result: &PackageResult, format: &CurrencyFormat) -> BTreeMap<String, String> {
    let b = &result.breakdown;
    let mut fields = DisplayFields::new(format);

    fields.percent("fee", b.rates.fee);
    fields.money("hr_after_fee", b.rates.hourly_after_fee);
    fields.money("ot_hr_after_fee", b.rates.ot_hourly_after_fee);

    fields.money("daily_nt", b.stipend.daily_non_taxable);
    fields.money("weekly_nt", b.stipend.weekly_non_taxable);
    fields.money("stipend_hourly", b.stipend.hourly);
    fields.money("housing_hourly", b.stipend.housing_hourly);
    fields.money("meals_hourly", b.stipend.meals_hourly);

    fields.number("contract_regular_hours", b.hours.contract_regular);
    fields.number("contract_ot_hours", b.hours.contract_overtime);
    fields.number("total_contract_hours", b.hours.contract_total);
    fields.number("sick_hours", b.hours.sick_hours);
    fields.number("daily_regular_hours", b.hours.daily_regular);
    fields.number("ot_excess_hours", b.hours.daily_overtime_excess);

    fields.granular("taxable", &b.pay.taxable);
    fields.granular("non_taxable", &b.pay.non_taxable);
    fields.granular("total_pay", &b.pay.total);

    fields.money("pay_rate", b.package.pay_rate);
    fields.money("ot_pay_rate", b.package.ot_pay_rate);
    fields.money("ot_rate_above_40", b.package.ot_rate_above_standard);
    fields.money("weekly_on_w2_taxable", b.package.weekly_on_w2_taxable);
    fields.money("weekly_taxable_with_ot", b.package.weekly_taxable_with_ot);
    fields.money("weekly_stipend_nt", b.package.weekly_stipend_nt);
    fields.money("weekly_gross", b.package.weekly_gross);

    fields.money("billing_weekly", b.billing.weekly);
    fields.money("billing_monthly", b.billing.monthly);
    fields.money("billing_contract", b.billing.contract);

    fields.money("margin_hourly", b.margin.hourly);
    fields.money("margin_ot_hourly", b.margin.overtime_hourly);
    fields.money("margin_weekly", b.margin.weekly);
    fields.money("margin_monthly", b.margin.monthly);
    fields.money("margin_contract", b.margin.contract);

    fields.money("orientation_rate", b.orientation.rate);
    fields.money("orientation_total", b.orientation.total_pay);
    fields.money("orientation_hourly", b.orientation.hourly);

    fields.money("start_bonus_hourly", b.one_time.start_bonus_hourly);
    fields.money("complete_bonus_hourly", b.one_time.complete_bonus_hourly);
    fields.money("bcg_hourly", b.one_time.bcg_hourly);
    fields.money("sick_hourly", b.one_time.sick_hourly);

    fields.into_map()
}

struct DisplayFields<'a> {
    format: &'a CurrencyFormat,
    map: BTreeMap<String, String>,
}

impl<'a> DisplayFields<'a> {
    fn new(format: &'a CurrencyFormat) -> Self {
        Self {
            format,
            map: BTreeMap::new(),
        }
    }

    fn money(&mut self, name: &str, value: Decimal) {
        self.map
            .insert(name.to_string(), format_currency(value, self.format));
    }

    fn number(&mut self, name: &str, value: Decimal) {
        self.map
            .insert(name.to_string(), format_number(value, self.format));
    }

    fn percent(&mut self, name: &str, fraction: Decimal) {
        let percent = format_number(fraction * Decimal::ONE_HUNDRED, self.format);
        self.map.insert(name.to_string(), format!("{}%", percent));
    }

    fn granular(&mut self, prefix: &str, value: &Granular) {
        self.money(&format!("{}_hourly", prefix), value.hourly);
        self.money(&format!("{}_weekly", prefix), value.weekly);
        self.money(&format!("{}_monthly", prefix), value.monthly);
        self.money(&format!("{}_contract", prefix), value.contract);
    }

    fn into_map(self) -> BTreeMap<String, String> {
        self.map
    }
}
