//! Loader for entered-counter documents (TOML or JSON)
//!
//! The format is picked from the file extension; anything that is not
//! `.json` is read as TOML.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use depot_types::{Error, Result};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }
}

/// Parse a document from a string in the given format
pub fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Toml => Ok(toml::from_str(content)?),
    }
}

/// Read and parse a document from disk
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let format = DocumentFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading input document");
    let content = std::fs::read_to_string(path)?;
    parse_document(&content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        depot: String,
        total_drivers: Option<u32>,
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("input")), DocumentFormat::Toml);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entry.toml");
        std::fs::write(&path, "depot = \"Khammam\"\ntotal_drivers = 120\n").unwrap();

        let sample: Sample = load_document(&path).unwrap();
        assert_eq!(sample.depot, "Khammam");
        assert_eq!(sample.total_drivers, Some(120));
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entry.json");
        std::fs::write(&path, r#"{"depot": "Jagityal"}"#).unwrap();

        let sample: Sample = load_document(&path).unwrap();
        assert_eq!(sample.depot, "Jagityal");
        assert_eq!(sample.total_drivers, None);
    }

    #[test]
    fn test_missing_file() {
        let result: Result<Sample> = load_document(Path::new("/nonexistent/entry.toml"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result: Result<Sample> = parse_document("depot = ", DocumentFormat::Toml);
        assert!(matches!(result, Err(Error::TomlParse(_))));
    }
}
