//! Key-metric summary shown after every computation

use serde::{Deserialize, Serialize};

/// A single displayed value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Amount(f64),
    /// Per-driver rate, already rounded to 2 decimals
    Rate(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Count(v) => v as f64,
            MetricValue::Amount(v) | MetricValue::Rate(v) => v,
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Count(v) => write!(f, "{}", v),
            MetricValue::Amount(v) => write!(f, "{}", v),
            MetricValue::Rate(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Labelled metric row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetric {
    pub label: &'static str,
    pub value: MetricValue,
}

/// The 15 key metrics of one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivitySummary {
    pub planned_services: u32,
    pub actual_services: u32,
    pub service_variance: i64,
    pub planned_km: u64,
    pub actual_km: u64,
    pub km_variance: i64,
    pub total_drivers: u32,
    pub available1: i64,
    pub available2: f64,
    pub attending_drivers: f64,
    pub driver_shortage: f64,
    pub drivers_on_duty: f64,
    pub drivers_for_bus: f64,
    pub km_per_driver: f64,
    pub services_per_driver: f64,
}

impl ProductivitySummary {
    /// Metrics in display order
    pub fn metrics(&self) -> [SummaryMetric; 15] {
        use MetricValue::{Amount, Count, Rate};

        let m = |label, value| SummaryMetric { label, value };
        [
            m("Planned Services", Count(i64::from(self.planned_services))),
            m("Actual Services", Count(i64::from(self.actual_services))),
            m("Service Variance", Count(self.service_variance)),
            m("Planned KM", Count(self.planned_km as i64)),
            m("Actual KM", Count(self.actual_km as i64)),
            m("KM Variance", Count(self.km_variance)),
            m("Total Drivers", Count(i64::from(self.total_drivers))),
            m("Available Drivers-1", Count(self.available1)),
            m("Available Drivers-2", Amount(self.available2)),
            m("Attending Drivers", Amount(self.attending_drivers)),
            m("Driver Shortage", Amount(self.driver_shortage)),
            m("Drivers on Duty", Amount(self.drivers_on_duty)),
            m("Drivers for Bus Services", Amount(self.drivers_for_bus)),
            m("KM per Driver", Rate(self.km_per_driver)),
            m("Services per Driver", Rate(self.services_per_driver)),
        ]
    }
}

/// Entered total versus the sum of its reason buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReasonCheck {
    pub label: &'static str,
    pub entered: f64,
    pub from_reasons: u64,
    pub difference: f64,
}

impl ReasonCheck {
    pub fn is_balanced(&self) -> bool {
        self.difference == 0.0
    }
}
