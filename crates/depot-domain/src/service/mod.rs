//! Domain services

pub mod metric_derivation;

pub use metric_derivation::{derive, reason_checks, round_to_cents, summarize};
