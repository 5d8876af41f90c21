//! Domain layer for depot driver productivity
//!
//! Holds the value types for one submission, the metric derivation
//! pipeline, and the persistence trait the infrastructure layer implements.

pub mod model;
pub mod repository;
pub mod service;
