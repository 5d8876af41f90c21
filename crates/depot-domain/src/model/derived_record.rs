use serde::{Deserialize, Serialize};

/// Metrics derived from one `InputRecord`.
///
/// Always recomputed; never edited or stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    pub service_variance: i64,
    pub km_variance: i64,

    pub medically_unfit_from_reasons: u64,
    pub medically_unfit_difference: i64,
    pub sick_leave_from_reasons: u64,
    pub sick_leave_difference: f64,

    /// After unfitness and suspension
    pub available1: i64,
    /// After leave and absence categories
    pub available2: f64,
    pub attending_drivers: f64,

    pub driver_shortage: f64,
    pub on_duty: f64,
    pub drivers_for_bus: f64,

    /// Rounded to 2 decimals
    pub km_per_driver: f64,
    /// Rounded to 2 decimals
    pub services_per_driver: f64,
}
