//! Property tests for the pay package engine.
//!
//! These check the invariants that hold for every input: evaluation never
//! panics, the overtime pay rate is always derived from the regular rate,
//! zero hours spread to zero, and evaluation is repeatable.

use proptest::prelude::*;
use rust_decimal::Decimal;

use pay_package_engine::calculation::compute;
use pay_package_engine::config::{EngineConfig, EngineConstants};
use pay_package_engine::models::{FormFields, OrientationType, PackageInput, SickHours};

/// Any Decimal, including values far outside the accepted range.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// A Decimal in the range a recruiter would plausibly type.
fn typical(max_whole: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_whole * 100).prop_map(|cents| Decimal::new(cents, 2))
}

fn orientation_type() -> impl Strategy<Value = OrientationType> {
    prop_oneof![Just(OrientationType::Billable), Just(OrientationType::NonBillable)]
}

fn sick_hours(value: impl Strategy<Value = Decimal>) -> impl Strategy<Value = SickHours> {
    prop_oneof![
        Just(SickHours::Auto),
        value.prop_map(|value| SickHours::Manual { value }),
    ]
}

fn client() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("SimpliFI".to_string()),
        Just("Direct".to_string()),
        Just("Northgate".to_string()),
        "[A-Za-z ]{0,12}",
    ]
}

fn arbitrary_input() -> impl Strategy<Value = PackageInput> {
    (
        (client(), any_decimal(), any_decimal(), any_decimal()),
        (any_decimal(), any_decimal(), any_decimal()),
        (any_decimal(), any_decimal()),
        (orientation_type(), any_decimal(), any_decimal()),
        (any_decimal(), any_decimal(), any_decimal()),
        (proptest::option::of(any_decimal()), sick_hours(any_decimal())),
    )
        .prop_map(
            |(
                (client, bill_regular, bill_ot, pay_regular),
                (hours_regular, hours_ot, contract_weeks),
                (house_daily, meals_daily),
                (orientation_type, orientation_hours, orientation_pay),
                (bonus_start, bonus_complete, bcg_reimbursement),
                (schedule_days, sick_hours),
            )| PackageInput {
                client,
                bill_regular,
                bill_ot,
                pay_regular,
                hours_regular,
                hours_ot,
                contract_weeks,
                house_daily,
                meals_daily,
                orientation_type,
                orientation_hours,
                orientation_pay,
                bonus_start,
                bonus_complete,
                bcg_reimbursement,
                schedule_days,
                sick_hours,
            },
        )
}

fn arbitrary_constants() -> impl Strategy<Value = EngineConstants> {
    (
        (any_decimal(), any_decimal(), any_decimal()),
        (any_decimal(), any_decimal(), any_decimal()),
        (any_decimal(), any_decimal(), any_decimal()),
    )
        .prop_map(
            |(
                (burden_multiplier, weeks_per_month, default_schedule_days),
                (non_billable_orientation_rate, overtime_multiplier, standard_weekly_hours),
                (daily_overtime_threshold, sick_accrual_hours, days_per_week),
            )| EngineConstants {
                burden_multiplier,
                weeks_per_month,
                default_schedule_days,
                non_billable_orientation_rate,
                overtime_multiplier,
                standard_weekly_hours,
                daily_overtime_threshold,
                sick_accrual_hours,
                days_per_week,
            },
        )
}

fn typical_input() -> impl Strategy<Value = PackageInput> {
    (
        (client(), typical(200), typical(300), typical(150)),
        (typical(60), typical(20), typical(52)),
        (typical(300), typical(150)),
        (orientation_type(), typical(40), typical(100)),
        (typical(5000), typical(5000), typical(500)),
        (proptest::option::of(typical(7)), sick_hours(typical(100))),
    )
        .prop_map(
            |(
                (client, bill_regular, bill_ot, pay_regular),
                (hours_regular, hours_ot, contract_weeks),
                (house_daily, meals_daily),
                (orientation_type, orientation_hours, orientation_pay),
                (bonus_start, bonus_complete, bcg_reimbursement),
                (schedule_days, sick_hours),
            )| PackageInput {
                client,
                bill_regular,
                bill_ot,
                pay_regular,
                hours_regular,
                hours_ot,
                contract_weeks,
                house_daily,
                meals_daily,
                orientation_type,
                orientation_hours,
                orientation_pay,
                bonus_start,
                bonus_complete,
                bcg_reimbursement,
                schedule_days,
                sick_hours,
            },
        )
}

proptest! {
    #[test]
    fn compute_is_total(input in arbitrary_input()) {
        let result = compute(&input, &EngineConfig::sample());

        prop_assert!(result.gauge.progress_fraction >= Decimal::ZERO);
        prop_assert!(result.gauge.progress_fraction <= Decimal::ONE);
        prop_assert_eq!(result.audit_trace.steps.len(), 10);
    }

    #[test]
    fn compute_is_total_for_any_rate_card(
        input in arbitrary_input(),
        constants in arbitrary_constants(),
    ) {
        let config = EngineConfig::sample().with_constants(constants);
        let result = compute(&input, &config);

        prop_assert!(result.gauge.progress_fraction <= Decimal::ONE);
        prop_assert_eq!(result.audit_trace.steps.len(), 10);
    }

    #[test]
    fn overtime_pay_rate_is_time_and_a_half(input in arbitrary_input()) {
        let result = compute(&input, &EngineConfig::sample());
        let pay_regular = input.bounded().pay_regular;

        prop_assert_eq!(result.write_back.pay_ot, pay_regular * Decimal::new(15, 1));
        prop_assert_eq!(result.breakdown.package.ot_pay_rate, result.write_back.pay_ot);
    }

    #[test]
    fn zero_hours_spread_nothing(input in typical_input()) {
        let input = PackageInput {
            hours_regular: Decimal::ZERO,
            hours_ot: Decimal::ZERO,
            ..input
        };
        let result = compute(&input, &EngineConfig::sample());
        let b = &result.breakdown;

        prop_assert_eq!(b.stipend.hourly, Decimal::ZERO);
        prop_assert_eq!(b.stipend.housing_hourly, Decimal::ZERO);
        prop_assert_eq!(b.stipend.meals_hourly, Decimal::ZERO);
        prop_assert_eq!(b.package.weekly_on_w2_taxable, Decimal::ZERO);
        prop_assert_eq!(b.pay.taxable.weekly, Decimal::ZERO);
    }

    #[test]
    fn standard_week_gets_flat_stipend(input in typical_input(), hours in typical(40)) {
        let input = PackageInput {
            hours_regular: hours,
            ..input
        };
        let result = compute(&input, &EngineConfig::sample());
        let b = &result.breakdown;

        prop_assert_eq!(b.package.weekly_stipend_nt, b.stipend.weekly_non_taxable);
        prop_assert_eq!(b.package.ot_rate_above_standard, Decimal::ZERO);
    }

    #[test]
    fn zero_contract_weeks_spread_nothing(input in typical_input()) {
        let input = PackageInput {
            contract_weeks: Decimal::ZERO,
            ..input
        };
        let result = compute(&input, &EngineConfig::sample());
        let b = &result.breakdown;

        prop_assert_eq!(b.one_time.start_bonus_hourly, Decimal::ZERO);
        prop_assert_eq!(b.one_time.complete_bonus_hourly, Decimal::ZERO);
        prop_assert_eq!(b.one_time.bcg_hourly, Decimal::ZERO);
        prop_assert_eq!(b.one_time.sick_hourly, Decimal::ZERO);
        prop_assert_eq!(b.orientation.hourly, Decimal::ZERO);
        prop_assert_eq!(b.margin.contract, Decimal::ZERO);
    }

    #[test]
    fn billable_orientation_never_touches_margin(input in typical_input()) {
        let billable = PackageInput {
            orientation_type: OrientationType::Billable,
            ..input.clone()
        };
        let without = PackageInput {
            orientation_type: OrientationType::Billable,
            orientation_hours: Decimal::ZERO,
            ..input
        };
        let config = EngineConfig::sample();

        prop_assert_eq!(
            compute(&billable, &config).breakdown.margin,
            compute(&without, &config).breakdown.margin
        );
    }

    #[test]
    fn compute_is_idempotent(input in arbitrary_input()) {
        let config = EngineConfig::sample();
        prop_assert_eq!(compute(&input, &config), compute(&input, &config));
    }

    #[test]
    fn form_parsing_is_total(
        fields in proptest::collection::hash_map("[a-z_]{1,20}", ".{0,24}", 0..20)
    ) {
        let form = FormFields::from_pairs(fields);
        let result = compute(&form.to_input(), &EngineConfig::sample());

        prop_assert!(result.gauge.progress_fraction <= Decimal::ONE);
    }
}
