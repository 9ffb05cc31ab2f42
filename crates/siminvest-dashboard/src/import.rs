//! Dataset import/export in the JSON interchange format
//!
//! Import is all-or-nothing: any failure leaves the current collection
//! untouched, because the parsed replacement is only swapped in by the
//! caller after a fully successful parse.

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

use siminvest_engine::RegencyRecord;

/// Import failure taxonomy
#[derive(Debug, Error)]
pub enum ImportError {
    /// The payload is not valid JSON
    #[error("file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON, wrong shape: the top level must be an array
    #[error("payload must be a JSON array of regency records")]
    NotAnArray,
}

/// Parse an interchange payload, enforcing the top-level array shape
pub fn parse_records(text: &str) -> Result<Vec<RegencyRecord>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(ImportError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Read and parse a dataset file
pub fn import_from_file(path: &Path) -> Result<Vec<RegencyRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file: {}", path.display()))?;
    let records = parse_records(&text)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    Ok(records)
}

/// Write the collection as pretty-printed interchange JSON
pub fn export_to_file(records: &[RegencyRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;
    use siminvest_engine::stats::global_stats;

    #[test]
    fn test_parse_rejects_non_array_payload() {
        let err = parse_records(r#"{"kabKota": "Dompu"}"#).unwrap_err();
        assert!(matches!(err, ImportError::NotAnArray));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_records("not json at all").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn test_parse_empty_array_is_valid() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_export_import_round_trip_preserves_aggregates() {
        let records = seed_records();
        let json = serde_json::to_string_pretty(&records).unwrap();
        let reimported = parse_records(&json).unwrap();

        assert_eq!(records, reimported);
        assert_eq!(global_stats(&records), global_stats(&reimported));
    }
}
