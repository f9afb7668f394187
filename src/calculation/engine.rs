//! Evaluation of a complete pay package.

use rust_decimal::Decimal;
use tracing::debug;

use super::{
    HourlyCosts, OneTimePayments, OrientationTerms, apply_client_fee, calculate_billing,
    calculate_contract_hours, calculate_margin, calculate_orientation, calculate_weekly_stipend,
    calculate_weekly_taxable, detect_daily_overtime, spread_one_time_payments, spread_stipend,
};
use crate::config::EngineConfig;
use crate::models::{
    AfterFeeRates, AuditTrace, AuditWarning, CandidatePay, Granular, HoursBreakdown,
    InputWriteBack, OneTimeCosts, OrientationCost, PackageBreakdown, PackageInput, PackageResult,
    PackageView, StipendBreakdown,
};
use crate::presentation::read_gauge;

/// Evaluates one input record against an engine configuration.
///
/// Evaluation is total: every input, including an empty one, produces a
/// result. Numeric fields are first rounded and saturated (see
/// [`PackageInput::bounded`]). The same input and configuration always
/// produce the same result.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::compute;
/// use pay_package_engine::config::EngineConfig;
/// use pay_package_engine::models::PackageInput;
/// use rust_decimal::Decimal;
///
/// let input = PackageInput {
///     client: "SimpliFI".to_string(),
///     bill_regular: Decimal::new(50, 0),
///     pay_regular: Decimal::new(30, 0),
///     hours_regular: Decimal::new(36, 0),
///     contract_weeks: Decimal::new(13, 0),
///     house_daily: Decimal::new(20, 0),
///     meals_daily: Decimal::new(15, 0),
///     schedule_days: Some(Decimal::new(5, 0)),
///     ..PackageInput::default()
/// };
///
/// let result = compute(&input, &EngineConfig::sample());
///
/// assert_eq!(result.breakdown.rates.hourly_after_fee, Decimal::new(47, 0));
/// assert_eq!(result.breakdown.margin.hourly.round_dp(2), Decimal::new(172, 2));
/// assert_eq!(result.write_back.pay_ot, Decimal::new(45, 0));
/// ```
pub fn compute(input: &PackageInput, config: &EngineConfig) -> PackageResult {
    let input = input.bounded();
    let constants = &config.constants().bounded();
    let schedule_days = input
        .schedule_days
        .unwrap_or(constants.default_schedule_days);

    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let fee = apply_client_fee(
        &input.client,
        input.bill_regular,
        input.bill_ot,
        config.fees(),
        step_number,
    );
    trace.steps.push(fee.audit_step.clone());
    step_number += 1;

    if !fee.known_client {
        trace.warnings.push(AuditWarning::new(
            "UNKNOWN_CLIENT",
            format!(
                "Client '{}' is not in the fee schedule; no fee was deducted",
                input.client
            ),
            "low",
        ));
    }

    let stipend = spread_stipend(
        input.house_daily,
        input.meals_daily,
        input.hours_regular,
        constants,
        step_number,
    );
    trace.steps.push(stipend.audit_step.clone());
    step_number += 1;

    let hours = calculate_contract_hours(
        input.hours_regular,
        input.hours_ot,
        input.contract_weeks,
        &input.sick_hours,
        constants,
        step_number,
    );
    trace.steps.push(hours.audit_step.clone());
    step_number += 1;

    if hours.regular <= Decimal::ZERO {
        trace.warnings.push(AuditWarning::new(
            "NO_REGULAR_HOURS",
            "Contract has no regular hours; one-time payments and orientation are not spread",
            "medium",
        ));
    }

    let payments = OneTimePayments {
        bonus_start: input.bonus_start,
        bonus_complete: input.bonus_complete,
        bcg_reimbursement: input.bcg_reimbursement,
    };
    let one_time = spread_one_time_payments(
        &payments,
        hours.sick_hours,
        input.pay_regular,
        hours.regular,
        step_number,
    );
    trace.steps.push(one_time.audit_step.clone());
    step_number += 1;

    let terms = OrientationTerms {
        orientation_type: input.orientation_type,
        hours: input.orientation_hours,
        pay_override: input.orientation_pay,
    };
    let orientation = calculate_orientation(
        &terms,
        input.pay_regular,
        stipend.housing_hourly,
        stipend.meals_hourly,
        hours.regular,
        constants,
        step_number,
    );
    trace.steps.push(orientation.audit_step.clone());
    step_number += 1;

    let detection = detect_daily_overtime(
        input.hours_regular,
        schedule_days,
        input.pay_regular,
        stipend.hourly,
        constants,
        step_number,
    );
    trace.steps.push(detection.audit_step.clone());
    step_number += 1;

    let weekly_stipend = calculate_weekly_stipend(
        input.hours_regular,
        stipend.weekly_non_taxable,
        constants,
        step_number,
    );
    trace.steps.push(weekly_stipend.audit_step.clone());
    step_number += 1;

    let taxable = calculate_weekly_taxable(
        input.hours_regular,
        input.hours_ot,
        schedule_days,
        input.pay_regular,
        &detection,
        constants,
        step_number,
    );
    trace.steps.push(taxable.audit_step.clone());
    step_number += 1;

    let billing = calculate_billing(
        input.hours_regular,
        input.hours_ot,
        fee.hourly_after_fee,
        fee.ot_hourly_after_fee,
        input.contract_weeks,
        constants,
        step_number,
    );
    trace.steps.push(billing.audit_step.clone());
    step_number += 1;

    let costs = HourlyCosts {
        pay_regular: input.pay_regular,
        stipend_hourly: stipend.hourly,
        bcg_hourly: one_time.bcg_hourly,
        start_bonus_hourly: one_time.start_bonus_hourly,
        complete_bonus_hourly: one_time.complete_bonus_hourly,
        sick_hourly: one_time.sick_hourly,
        orientation_hourly: orientation.hourly,
    };
    let margin = calculate_margin(
        fee.hourly_after_fee,
        fee.ot_hourly_after_fee,
        &costs,
        input.hours_regular,
        input.hours_ot,
        input.contract_weeks,
        constants,
        step_number,
    );
    trace.steps.push(margin.audit_step.clone());

    if margin.margin.hourly < Decimal::ZERO {
        trace.warnings.push(AuditWarning::new(
            "NEGATIVE_MARGIN",
            format!(
                "Gross margin is negative at ${}/hr",
                margin.margin.hourly.round_dp(2)
            ),
            "high",
        ));
    }

    let taxable_pay = Granular {
        hourly: input.pay_regular,
        weekly: taxable.weekly_taxable_with_ot,
        monthly: taxable.weekly_taxable_with_ot.saturating_mul(constants.weeks_per_month),
        contract: taxable.weekly_taxable_with_ot.saturating_mul(input.contract_weeks),
    };
    let non_taxable_pay = Granular {
        hourly: stipend.hourly,
        weekly: weekly_stipend.amount,
        monthly: weekly_stipend.amount.saturating_mul(constants.weeks_per_month),
        contract: weekly_stipend.amount.saturating_mul(input.contract_weeks),
    };

    let breakdown = PackageBreakdown {
        rates: AfterFeeRates {
            fee: fee.fee,
            hourly_after_fee: fee.hourly_after_fee,
            ot_hourly_after_fee: fee.ot_hourly_after_fee,
        },
        stipend: StipendBreakdown {
            daily_non_taxable: stipend.daily_non_taxable,
            weekly_non_taxable: stipend.weekly_non_taxable,
            hourly: stipend.hourly,
            housing_hourly: stipend.housing_hourly,
            meals_hourly: stipend.meals_hourly,
        },
        hours: HoursBreakdown {
            contract_regular: hours.regular,
            contract_overtime: hours.overtime,
            contract_total: hours.total,
            sick_hours: hours.sick_hours,
            daily_regular: detection.daily_regular_hours,
            daily_overtime_excess: detection.daily_excess_hours,
        },
        pay: CandidatePay {
            total: taxable_pay.plus(&non_taxable_pay),
            taxable: taxable_pay,
            non_taxable: non_taxable_pay,
        },
        package: PackageView {
            pay_rate: input.pay_regular,
            ot_pay_rate: detection.ot_pay_rate,
            ot_rate_above_standard: detection.ot_rate_above_standard,
            weekly_on_w2_taxable: taxable.weekly_on_w2_taxable,
            weekly_taxable_with_ot: taxable.weekly_taxable_with_ot,
            weekly_stipend_nt: weekly_stipend.amount,
            weekly_gross: taxable.weekly_on_w2_taxable + weekly_stipend.amount,
        },
        billing: billing.billing,
        margin: margin.margin,
        orientation: OrientationCost {
            orientation_type: input.orientation_type,
            rate: orientation.rate,
            total_pay: orientation.total_pay,
            hourly: orientation.hourly,
        },
        one_time: OneTimeCosts {
            start_bonus_hourly: one_time.start_bonus_hourly,
            complete_bonus_hourly: one_time.complete_bonus_hourly,
            bcg_hourly: one_time.bcg_hourly,
            sick_hourly: one_time.sick_hourly,
        },
    };

    let write_back = InputWriteBack {
        pay_ot: detection.ot_pay_rate,
        sick_hours: input.sick_hours.is_auto().then_some(hours.sick_hours),
    };

    let gauge = read_gauge(
        breakdown.margin.hourly,
        input.bill_regular,
        config.gauge(),
        config.currency(),
    );

    debug!(
        client = %input.client,
        margin_hourly = %breakdown.margin.hourly,
        steps = trace.steps.len(),
        warnings = trace.warnings.len(),
        "Package evaluated"
    );

    PackageResult {
        breakdown,
        gauge,
        write_back,
        audit_trace: trace,
    }
}
