//! Error types for depot-productivity

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised while turning an entered draft into an input record
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("Field {field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Field {field} is out of range (got {value}, max {max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Unknown depot: {0}")]
    UnknownDepot(String),

    #[error("Unknown mode: {0} (expected urban or rural)")]
    UnknownMode(String),
}

/// Relational store errors
///
/// Driver errors are flattened to strings at the infrastructure boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database path error: {0}")]
    Path(String),

    #[error("Connection is not alive")]
    NotAlive,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Error connecting to database: {0}")]
    Connection(StoreError),

    #[error("Failed to insert data: {0}")]
    Write(StoreError),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
