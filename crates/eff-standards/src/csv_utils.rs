//! Shared CSV utilities for loading lookup files.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "EFF_STANDARDS_DIR";

/// Get the default standards root directory.
///
/// Checks the `EFF_STANDARDS_DIR` environment variable first,
/// then falls back to the `standards/` directory relative to the crate.
pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Read a CSV file into a vector of row maps keyed by header.
///
/// Handles BOM characters and trims whitespace from values.
pub fn read_csv_rows(path: &Path) -> Result<Vec<BTreeMap<String, String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .iter()
        .map(clean_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Read every record of a CSV file, header row included, without trimming cells.
pub fn read_csv_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = std::fs::File::open(path).with_context(|| format!("open: {}", path.display()))?;
    read_records(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Read every record from a reader, header row included.
pub fn read_records<R: Read>(input: R) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record {}", idx + 1))?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if idx == 0
            && let Some(first) = row.first_mut()
        {
            *first = first.trim_start_matches('\u{feff}').to_string();
        }
        rows.push(row);
    }
    Ok(rows)
}

fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_lowercase()
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Parse a yes/no style flag.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}
