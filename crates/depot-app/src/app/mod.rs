//! Application use cases

pub mod submission_service;

pub use submission_service::{compute, Computation, Submission, SummarySession};
