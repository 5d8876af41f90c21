//! Reference constants consulted while collecting input

pub mod benchmarks;
pub mod depot_overrides;

pub use benchmarks::{benchmark_table, hint, lookup, BENCHMARK_KEYS};
pub use depot_overrides::{depot_override, DepotOverride};
