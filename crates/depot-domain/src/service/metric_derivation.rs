//! Metric derivation pipeline
//!
//! Turns one `InputRecord` into its `DerivedRecord`. Pure and infallible:
//! inputs are assumed to have been validated by whoever collected them.
//!
//! # Formula chain
//! ```text
//! service_variance  = actual_services - planned_services
//! km_variance       = actual_km - planned_km
//! available1        = total_drivers - (medically_unfit + suspended_drivers)
//! available2        = available1 - (weekly_off + special_off + others + long_leave
//!                                   + sick_leave + long_absent + short_leave)
//! attending_drivers = available2 - spot_absent
//! driver_shortage   = drivers_required - attending_drivers
//! on_duty           = attending_drivers + double_duty + off_cancel
//! drivers_for_bus   = on_duty - drivers_as_conductors
//! km_per_driver     = actual_km / attending_drivers        (0 when no one attends)
//! services_per_driver = actual_services / attending_drivers (0 when no one attends)
//! ```
//!
//! Percentage fields are added and subtracted as raw numbers. They are not
//! scaled by the driver count.

use tracing::debug;

use crate::model::{DerivedRecord, InputRecord, ProductivitySummary, ReasonCheck};

/// Round to 2 decimal places; exact ties go to the even neighbour
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `actual - planned` for kilometre counts, saturating at the `i64` bounds
fn km_difference(actual: u64, planned: u64) -> i64 {
    let diff = i128::from(actual) - i128::from(planned);
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}

/// `numerator / attending`, rounded to cents; 0 when `attending` is zero
pub fn per_driver(numerator: f64, attending: f64) -> f64 {
    if attending == 0.0 {
        0.0
    } else {
        round_to_cents(numerator / attending)
    }
}

pub fn derive(input: &InputRecord) -> DerivedRecord {
    let service_variance = i64::from(input.actual_services) - i64::from(input.planned_services);
    let km_variance = km_difference(input.actual_km, input.planned_km);

    let medically_unfit_from_reasons = input.medically_unfit_reasons.total();
    let medically_unfit_difference =
        i64::from(input.medically_unfit) - medically_unfit_from_reasons as i64;

    let sick_leave_from_reasons = input.sick_leave_reasons.total();
    let sick_leave_difference = input.sick_leave - sick_leave_from_reasons as f64;

    let available1 = i64::from(input.total_drivers)
        - (i64::from(input.medically_unfit) + i64::from(input.suspended_drivers));
    let available2 = available1 as f64
        - (input.weekly_off
            + input.special_off
            + input.others
            + input.long_leave
            + input.sick_leave
            + f64::from(input.long_absent)
            + f64::from(input.short_leave));
    let attending_drivers = available2 - input.spot_absent;

    let driver_shortage = f64::from(input.drivers_required) - attending_drivers;
    let on_duty = attending_drivers + input.double_duty + input.off_cancel;
    let drivers_for_bus = on_duty - f64::from(input.drivers_as_conductors);

    let km_per_driver = per_driver(input.actual_km as f64, attending_drivers);
    let services_per_driver = per_driver(f64::from(input.actual_services), attending_drivers);

    debug!(
        depot = %input.depot,
        available1,
        available2,
        attending_drivers,
        km_per_driver,
        services_per_driver,
        "derived productivity metrics"
    );

    DerivedRecord {
        service_variance,
        km_variance,
        medically_unfit_from_reasons,
        medically_unfit_difference,
        sick_leave_from_reasons,
        sick_leave_difference,
        available1,
        available2,
        attending_drivers,
        driver_shortage,
        on_duty,
        drivers_for_bus,
        km_per_driver,
        services_per_driver,
    }
}

/// Pick the 15 displayed metrics out of an input and its derivation
pub fn summarize(input: &InputRecord, derived: &DerivedRecord) -> ProductivitySummary {
    ProductivitySummary {
        planned_services: input.planned_services,
        actual_services: input.actual_services,
        service_variance: derived.service_variance,
        planned_km: input.planned_km,
        actual_km: input.actual_km,
        km_variance: derived.km_variance,
        total_drivers: input.total_drivers,
        available1: derived.available1,
        available2: derived.available2,
        attending_drivers: derived.attending_drivers,
        driver_shortage: derived.driver_shortage,
        drivers_on_duty: derived.on_duty,
        drivers_for_bus: derived.drivers_for_bus,
        km_per_driver: derived.km_per_driver,
        services_per_driver: derived.services_per_driver,
    }
}

/// Medically-unfit and sick-leave totals checked against their reason buckets
pub fn reason_checks(input: &InputRecord, derived: &DerivedRecord) -> [ReasonCheck; 2] {
    [
        ReasonCheck {
            label: "Medically Unfit",
            entered: f64::from(input.medically_unfit),
            from_reasons: derived.medically_unfit_from_reasons,
            difference: derived.medically_unfit_difference as f64,
        },
        ReasonCheck {
            label: "Sick Leave",
            entered: input.sick_leave,
            from_reasons: derived.sick_leave_from_reasons,
            difference: derived.sick_leave_difference,
        },
    ]
}
