//! Export functionality

pub mod excel;

pub use excel::export_summary_to_excel;
