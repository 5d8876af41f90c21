//! Benchmark productivity figures per operating mode
//!
//! Each key maps to `(current, estimate)`. The current figure pre-fills the
//! matching input; both are shown as a hint beside it. Derivation never
//! reads these values.

use std::collections::HashMap;
use std::sync::LazyLock;

use depot_domain::model::BenchmarkEntry;
use depot_types::Mode;

/// Benchmarked metric keys, in entry order
pub const BENCHMARK_KEYS: [&str; 11] = [
    "total_drivers",
    "weekly_off",
    "special_off",
    "others",
    "long_leave",
    "sick_leave",
    "spot_absent",
    "double_duty",
    "off_cancel",
    "driver_per_schedule",
    "drivers_required",
];

pub static URBAN_BENCHMARKS: LazyLock<HashMap<&'static str, BenchmarkEntry>> =
    LazyLock::new(|| {
        HashMap::from([
            ("total_drivers", BenchmarkEntry::counts(571, 544)),
            ("weekly_off", BenchmarkEntry::new(13.6, 14.0)),
            ("special_off", BenchmarkEntry::new(23.7, 20.7)),
            ("others", BenchmarkEntry::new(3.8, 2.0)),
            ("long_leave", BenchmarkEntry::new(5.8, 5.0)),
            ("sick_leave", BenchmarkEntry::new(4.5, 4.0)),
            ("spot_absent", BenchmarkEntry::new(3.6, 2.0)),
            ("double_duty", BenchmarkEntry::new(4.9, 4.0)),
            ("off_cancel", BenchmarkEntry::new(1.7, 2.0)),
            ("driver_per_schedule", BenchmarkEntry::new(2.57, 2.45)),
            ("drivers_required", BenchmarkEntry::counts(52, -22)),
        ])
    });

pub static RURAL_BENCHMARKS: LazyLock<HashMap<&'static str, BenchmarkEntry>> =
    LazyLock::new(|| {
        HashMap::from([
            ("total_drivers", BenchmarkEntry::counts(365, 365)),
            ("weekly_off", BenchmarkEntry::new(12.7, 14.0)),
            ("special_off", BenchmarkEntry::new(71.0, 71.0)),
            ("others", BenchmarkEntry::new(3.9, 2.0)),
            ("long_leave", BenchmarkEntry::new(3.7, 5.0)),
            ("sick_leave", BenchmarkEntry::new(6.9, 4.0)),
            ("spot_absent", BenchmarkEntry::new(1.2, 2.0)),
            ("double_duty", BenchmarkEntry::new(9.7, 10.0)),
            ("off_cancel", BenchmarkEntry::new(2.4, 2.0)),
            ("driver_per_schedule", BenchmarkEntry::new(2.11, 1.95)),
            ("drivers_required", BenchmarkEntry::counts(42, -16)),
        ])
    });

fn table_for(mode: Mode) -> &'static HashMap<&'static str, BenchmarkEntry> {
    match mode {
        Mode::Urban => &*URBAN_BENCHMARKS,
        Mode::Rural => &*RURAL_BENCHMARKS,
    }
}

/// Benchmark pair for a key; `(0, 0)` when the key is not benchmarked
pub fn lookup(mode: Mode, key: &str) -> BenchmarkEntry {
    table_for(mode).get(key).copied().unwrap_or(BenchmarkEntry::ZERO)
}

/// All benchmark entries for a mode, in entry order
pub fn benchmark_table(mode: Mode) -> Vec<(&'static str, BenchmarkEntry)> {
    BENCHMARK_KEYS
        .iter()
        .map(|&key| (key, lookup(mode, key)))
        .collect()
}

/// Input label annotated with its benchmark, e.g. `Weekly Off % (13.6 → 14.0)`
pub fn hint(label: &str, mode: Mode, key: &str) -> String {
    format!("{} ({})", label, lookup(mode, key).describe())
}
