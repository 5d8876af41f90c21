//! Application service layer - benchmarks, input resolution, config, sessions, export

pub mod app;
pub mod config;
pub mod constants;
pub mod export;
pub mod input;
pub mod repository;
