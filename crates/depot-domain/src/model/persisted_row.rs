use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{DerivedRecord, InputRecord};

/// Target table for appended summaries
pub const TABLE_NAME: &str = "productivity_summary";

/// Column order of `productivity_summary`. Inserts bind values in this order.
pub const COLUMNS: [&str; 33] = [
    "planned_schedules",
    "planned_services",
    "planned_km",
    "actual_services",
    "actual_km",
    "service_variance",
    "km_variance",
    "total_drivers",
    "available1",
    "available2",
    "attending_drivers",
    "driver_shortage",
    "on_duty",
    "drivers_for_bus",
    "km_per_driver",
    "services_per_driver",
    "created_at",
    "medically_unfit",
    "suspended_drivers",
    "weekly_off",
    "special_off",
    "others",
    "long_leave",
    "sick_leave",
    "long_absent",
    "short_leave",
    "spot_absent",
    "drivers_required",
    "double_duty",
    "driver_per_schedule",
    "off_cancel",
    "drivers_as_conductors",
    "entry_date",
];

/// One appended row of `productivity_summary`. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRow {
    pub planned_schedules: u32,
    pub planned_services: u32,
    pub planned_km: u64,
    pub actual_services: u32,
    pub actual_km: u64,
    pub service_variance: i64,
    pub km_variance: i64,
    pub total_drivers: u32,
    pub available1: i64,
    pub available2: f64,
    pub attending_drivers: f64,
    pub driver_shortage: f64,
    pub on_duty: f64,
    pub drivers_for_bus: f64,
    pub km_per_driver: f64,
    pub services_per_driver: f64,
    pub created_at: NaiveDateTime,
    pub medically_unfit: u32,
    pub suspended_drivers: u32,
    pub weekly_off: f64,
    pub special_off: f64,
    pub others: f64,
    pub long_leave: f64,
    pub sick_leave: f64,
    pub long_absent: u32,
    pub short_leave: u32,
    pub spot_absent: f64,
    pub drivers_required: u32,
    pub double_duty: f64,
    pub driver_per_schedule: f64,
    pub off_cancel: f64,
    pub drivers_as_conductors: u32,
    pub entry_date: NaiveDate,
}

impl PersistedRow {
    pub fn new(
        input: &InputRecord,
        derived: &DerivedRecord,
        created_at: NaiveDateTime,
        entry_date: NaiveDate,
    ) -> Self {
        Self {
            planned_schedules: input.planned_schedules,
            planned_services: input.planned_services,
            planned_km: input.planned_km,
            actual_services: input.actual_services,
            actual_km: input.actual_km,
            service_variance: derived.service_variance,
            km_variance: derived.km_variance,
            total_drivers: input.total_drivers,
            available1: derived.available1,
            available2: derived.available2,
            attending_drivers: derived.attending_drivers,
            driver_shortage: derived.driver_shortage,
            on_duty: derived.on_duty,
            drivers_for_bus: derived.drivers_for_bus,
            km_per_driver: derived.km_per_driver,
            services_per_driver: derived.services_per_driver,
            created_at,
            medically_unfit: input.medically_unfit,
            suspended_drivers: input.suspended_drivers,
            weekly_off: input.weekly_off,
            special_off: input.special_off,
            others: input.others,
            long_leave: input.long_leave,
            sick_leave: input.sick_leave,
            long_absent: input.long_absent,
            short_leave: input.short_leave,
            spot_absent: input.spot_absent,
            drivers_required: input.drivers_required,
            double_duty: input.double_duty,
            driver_per_schedule: input.driver_per_schedule,
            off_cancel: input.off_cancel,
            drivers_as_conductors: input.drivers_as_conductors,
            entry_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_types::{Depot, Mode};

    #[test]
    fn test_columns_are_unique() {
        let mut sorted = COLUMNS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 33);
    }

    #[test]
    fn test_columns_match_serialized_fields() {
        let input = InputRecord::empty(Depot::Khammam, Mode::Urban);
        let derived = crate::service::derive(&input);
        let created_at = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let row = PersistedRow::new(&input, &derived, created_at, created_at.date());

        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), COLUMNS.len());
        for column in COLUMNS {
            assert!(object.contains_key(column), "missing field {}", column);
        }
    }
}
