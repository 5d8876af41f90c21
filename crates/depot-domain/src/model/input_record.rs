use depot_types::{Depot, Mode};
use serde::{Deserialize, Serialize};

/// Display labels of the five reason buckets, in entry order
pub const REASON_LABELS: [&str; 5] = [
    "Spondilitis",
    "Spinal Disc",
    "Vision / Color Blindness",
    "Neuro",
    "Paralysis",
];

/// Per-reason driver counts. The same buckets are used for medical
/// unfitness and for sick leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonCounts {
    pub spondilitis: u32,
    pub spinal_disc: u32,
    pub vision_color_blindness: u32,
    pub neuro: u32,
    pub paralysis: u32,
}

impl ReasonCounts {
    pub fn counts(&self) -> [u32; 5] {
        [
            self.spondilitis,
            self.spinal_disc,
            self.vision_color_blindness,
            self.neuro,
            self.paralysis,
        ]
    }

    pub fn total(&self) -> u64 {
        self.counts().iter().map(|&c| u64::from(c)).sum()
    }

    /// Label/count pairs for display
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u32)> {
        REASON_LABELS.into_iter().zip(self.counts())
    }
}

/// Counters entered for one depot on one day.
///
/// Leave and duty fields marked "%" are entered as percentages but are
/// consumed as raw numbers by the derivation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub depot: Depot,
    pub mode: Mode,

    pub planned_schedules: u32,
    pub planned_services: u32,
    pub planned_km: u64,
    pub actual_services: u32,
    pub actual_km: u64,

    pub total_drivers: u32,
    pub medically_unfit: u32,
    pub suspended_drivers: u32,

    pub weekly_off: f64,  // %
    pub special_off: f64, // %
    pub others: f64,      // OD etc.
    pub long_leave: f64,  // %
    pub sick_leave: f64,  // %
    pub long_absent: u32,
    pub short_leave: u32,
    pub spot_absent: f64, // %

    pub medically_unfit_reasons: ReasonCounts,
    pub sick_leave_reasons: ReasonCounts,

    pub drivers_required: u32,
    pub double_duty: f64,         // %
    pub off_cancel: f64,          // weekly off cancel %
    pub driver_per_schedule: f64, // ratio, stored only
    pub drivers_as_conductors: u32,
}

impl InputRecord {
    /// An all-zero record for the given depot and mode
    pub fn empty(depot: Depot, mode: Mode) -> Self {
        Self {
            depot,
            mode,
            planned_schedules: 0,
            planned_services: 0,
            planned_km: 0,
            actual_services: 0,
            actual_km: 0,
            total_drivers: 0,
            medically_unfit: 0,
            suspended_drivers: 0,
            weekly_off: 0.0,
            special_off: 0.0,
            others: 0.0,
            long_leave: 0.0,
            sick_leave: 0.0,
            long_absent: 0,
            short_leave: 0,
            spot_absent: 0.0,
            medically_unfit_reasons: ReasonCounts::default(),
            sick_leave_reasons: ReasonCounts::default(),
            drivers_required: 0,
            double_duty: 0.0,
            off_cancel: 0.0,
            driver_per_schedule: 0.0,
            drivers_as_conductors: 0,
        }
    }

    /// Floating-point fields by name, for validation by the input collector
    pub fn decimal_fields(&self) -> [(&'static str, f64); 9] {
        [
            ("weekly_off", self.weekly_off),
            ("special_off", self.special_off),
            ("others", self.others),
            ("long_leave", self.long_leave),
            ("sick_leave", self.sick_leave),
            ("spot_absent", self.spot_absent),
            ("double_duty", self.double_duty),
            ("off_cancel", self.off_cancel),
            ("driver_per_schedule", self.driver_per_schedule),
        ]
    }
}
