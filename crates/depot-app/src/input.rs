//! Entered counters as read from an input document
//!
//! `InputDraft` mirrors `InputRecord` with every field optional. Resolution
//! fills the gaps the same way the entry form pre-fills its widgets:
//! depot overrides first, then the mode's current benchmark, then zero.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use depot_domain::model::{InputRecord, ReasonCounts};
use depot_types::{Depot, InputError, Mode};

use crate::constants::{depot_override, lookup};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot: Option<Depot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_schedules: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_services: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_km: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_services: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_km: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_drivers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medically_unfit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_drivers: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_off: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_off: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_leave: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_absent: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_leave: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_absent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivers_required: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_duty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_cancel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_per_schedule: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivers_as_conductors: Option<u32>,

    // Tables last so TOML output stays valid
    pub medically_unfit_reasons: ReasonCounts,
    pub sick_leave_reasons: ReasonCounts,
}

/// Largest kilometre count a stored row can hold
pub const MAX_KM: u64 = i64::MAX as u64;

/// Reject negative or non-finite decimal fields and unstorable km counts
pub fn validate(record: &InputRecord) -> Result<(), InputError> {
    for (field, value) in [("planned_km", record.planned_km), ("actual_km", record.actual_km)] {
        if value > MAX_KM {
            return Err(InputError::OutOfRange {
                field,
                value,
                max: MAX_KM,
            });
        }
    }
    for (field, value) in record.decimal_fields() {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field });
        }
        if value < 0.0 {
            return Err(InputError::Negative { field, value });
        }
    }
    Ok(())
}

impl InputDraft {
    pub fn new(depot: Depot, mode: Mode) -> Self {
        Self {
            depot: Some(depot),
            mode: Some(mode),
            ..Default::default()
        }
    }

    /// Build a validated `InputRecord`
    pub fn resolve(&self) -> Result<InputRecord, InputError> {
        let depot = self.depot.ok_or(InputError::MissingField("depot"))?;
        let mode = self.mode.ok_or(InputError::MissingField("mode"))?;
        let forced = depot_override(depot).copied().unwrap_or_default();

        let decimal = |value: Option<f64>, key: &str| value.unwrap_or_else(|| lookup(mode, key).current);
        // Counts cannot go below zero even where the benchmark does
        let count = |value: Option<u32>, key: &str| {
            value.unwrap_or_else(|| lookup(mode, key).current.max(0.0) as u32)
        };

        if forced != Default::default() {
            let entered = (self.planned_schedules, self.planned_services, self.planned_km);
            if entered != (None, None, None) {
                info!(depot = %depot, "Depot has fixed planned values; entered plan ignored");
            }
        }

        let record = InputRecord {
            depot,
            mode,
            planned_schedules: forced
                .planned_schedules
                .or(self.planned_schedules)
                .unwrap_or(0),
            planned_services: forced
                .planned_services
                .or(self.planned_services)
                .unwrap_or(0),
            planned_km: forced.planned_km.or(self.planned_km).unwrap_or(0),
            actual_services: self.actual_services.unwrap_or(0),
            actual_km: self.actual_km.unwrap_or(0),
            total_drivers: count(self.total_drivers, "total_drivers"),
            medically_unfit: self.medically_unfit.unwrap_or(0),
            suspended_drivers: self.suspended_drivers.unwrap_or(0),
            weekly_off: decimal(self.weekly_off, "weekly_off"),
            special_off: decimal(self.special_off, "special_off"),
            others: decimal(self.others, "others"),
            long_leave: decimal(self.long_leave, "long_leave"),
            sick_leave: decimal(self.sick_leave, "sick_leave"),
            long_absent: self.long_absent.unwrap_or(0),
            short_leave: self.short_leave.unwrap_or(0),
            spot_absent: decimal(self.spot_absent, "spot_absent"),
            medically_unfit_reasons: self.medically_unfit_reasons,
            sick_leave_reasons: self.sick_leave_reasons,
            drivers_required: count(self.drivers_required, "drivers_required"),
            double_duty: decimal(self.double_duty, "double_duty"),
            off_cancel: decimal(self.off_cancel, "off_cancel"),
            driver_per_schedule: decimal(self.driver_per_schedule, "driver_per_schedule"),
            drivers_as_conductors: self.drivers_as_conductors.unwrap_or(0),
        };

        validate(&record)?;
        debug!(depot = %record.depot, mode = %record.mode, "Resolved input record");
        Ok(record)
    }

    /// A fully populated draft holding the defaults for a depot and mode
    pub fn template(depot: Depot, mode: Mode) -> Result<Self, InputError> {
        Self::new(depot, mode).resolve().map(|record| Self::from(&record))
    }
}

impl From<&InputRecord> for InputDraft {
    fn from(r: &InputRecord) -> Self {
        Self {
            depot: Some(r.depot),
            mode: Some(r.mode),
            planned_schedules: Some(r.planned_schedules),
            planned_services: Some(r.planned_services),
            planned_km: Some(r.planned_km),
            actual_services: Some(r.actual_services),
            actual_km: Some(r.actual_km),
            total_drivers: Some(r.total_drivers),
            medically_unfit: Some(r.medically_unfit),
            suspended_drivers: Some(r.suspended_drivers),
            weekly_off: Some(r.weekly_off),
            special_off: Some(r.special_off),
            others: Some(r.others),
            long_leave: Some(r.long_leave),
            sick_leave: Some(r.sick_leave),
            long_absent: Some(r.long_absent),
            short_leave: Some(r.short_leave),
            spot_absent: Some(r.spot_absent),
            drivers_required: Some(r.drivers_required),
            double_duty: Some(r.double_duty),
            off_cancel: Some(r.off_cancel),
            driver_per_schedule: Some(r.driver_per_schedule),
            drivers_as_conductors: Some(r.drivers_as_conductors),
            medically_unfit_reasons: r.medically_unfit_reasons,
            sick_leave_reasons: r.sick_leave_reasons,
        }
    }
}
