//! Domain model types

pub mod benchmark;
pub mod derived_record;
pub mod input_record;
pub mod persisted_row;
pub mod summary;

pub use benchmark::BenchmarkEntry;
pub use derived_record::DerivedRecord;
pub use input_record::{InputRecord, ReasonCounts, REASON_LABELS};
pub use persisted_row::{PersistedRow, COLUMNS, TABLE_NAME};
pub use summary::{MetricValue, ProductivitySummary, ReasonCheck, SummaryMetric};
