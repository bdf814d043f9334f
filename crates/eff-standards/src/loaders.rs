//! Loaders for standardiser, classification, and harmoniser lookup files.
//!
//! ## File formats
//!
//! ```text
//! standardiser.csv     raw_value,standard_value
//! classifications.csv  id,short_name,long_name,standard_value,display_value,parent,order,required
//! harmoniser.csv       Ethnicity,Ethnicity type,<appended column>...
//! ```
//!
//! Classification rows sharing an `id` build one classification, in file
//! order. A blank `parent` means the item is top-level.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use eff_model::{Classification, ClassificationCollection, ClassificationDataItem, Standardiser};

use crate::config::StandardsPaths;
use crate::csv_utils::{get_field, parse_flag, read_csv_records, read_csv_rows};
use crate::error::StandardsError;

pub const STANDARDISER_FILE: &str = "standardiser.csv";
pub const CLASSIFICATIONS_FILE: &str = "classifications.csv";
pub const HARMONISER_FILE: &str = "harmoniser.csv";

const CLASSIFICATION_COLUMNS: &[&str] = &[
    "id",
    "short_name",
    "long_name",
    "standard_value",
    "display_value",
    "parent",
    "order",
    "required",
];

/// Everything the classification engine needs, loaded once per session.
#[derive(Debug, Clone)]
pub struct Standards {
    pub standardiser: Standardiser,
    pub classifications: ClassificationCollection,
    /// Harmoniser lookup rows, header row first.
    pub harmoniser_lookup: Vec<Vec<String>>,
}

/// Load all lookups from the default standards directory.
pub fn load_default_standards() -> Result<Standards> {
    load_standards(&StandardsPaths::in_root(crate::default_standards_root()))
}

/// Load all lookups from explicit paths.
pub fn load_standards(paths: &StandardsPaths) -> Result<Standards> {
    let standardiser = load_standardiser(&paths.standardiser)?;
    let classifications = load_classifications(&paths.classifications)?;
    let harmoniser_lookup = load_harmoniser_lookup(&paths.harmoniser)?;
    info!(
        conversions = standardiser.len(),
        classifications = classifications.len(),
        harmoniser_rows = harmoniser_lookup.len().saturating_sub(1),
        "loaded standards"
    );
    Ok(Standards {
        standardiser,
        classifications,
        harmoniser_lookup,
    })
}

/// Load standardiser conversions from a `raw_value,standard_value` CSV.
pub fn load_standardiser(path: &Path) -> Result<Standardiser> {
    let rows = read_csv_rows(path)?;
    require_columns(path, rows.first(), &["raw_value", "standard_value"])?;

    let mut standardiser = Standardiser::new();
    for (idx, row) in rows.iter().enumerate() {
        let raw = get_field(row, "raw_value");
        let standard = get_field(row, "standard_value");
        if raw.is_empty() || standard.is_empty() {
            warn!(path = %path.display(), line = idx + 2, "skipping incomplete standardiser row");
            continue;
        }
        standardiser.add_conversion(&raw, standard);
    }
    debug!(path = %path.display(), conversions = standardiser.len(), "loaded standardiser");
    Ok(standardiser)
}

/// Load classification definitions.
///
/// Rows without an `id` or `standard_value` are skipped. An `order` or
/// `required` value that does not parse fails the load with
/// [`StandardsError::InvalidRow`].
pub fn load_classifications(path: &Path) -> Result<ClassificationCollection> {
    let rows = read_csv_rows(path)?;
    require_columns(path, rows.first(), CLASSIFICATION_COLUMNS)?;

    let mut collection = ClassificationCollection::new();
    for (idx, row) in rows.iter().enumerate() {
        let line = idx + 2;
        let id = get_field(row, "id");
        let standard = get_field(row, "standard_value");
        if id.is_empty() || standard.is_empty() {
            warn!(path = %path.display(), line, "skipping incomplete classification row");
            continue;
        }
        let item = parse_item(path, line, row)?;

        if collection.get_classification_by_id(&id).is_none() {
            collection.add_classification(Classification::new(
                id.clone(),
                get_field(row, "short_name"),
                get_field(row, "long_name"),
            ));
        }
        if let Some(classification) = collection.get_classification_by_id_mut(&id) {
            classification.add_data_item(standard, item);
        }
    }
    debug!(path = %path.display(), classifications = collection.len(), "loaded classifications");
    Ok(collection)
}

/// Load the harmoniser lookup table, header row included.
pub fn load_harmoniser_lookup(path: &Path) -> Result<Vec<Vec<String>>> {
    let rows = read_csv_records(path)?;
    if rows.first().is_none_or(|header| header.len() < 2) {
        return Err(StandardsError::InvalidRow {
            path: path.to_path_buf(),
            line: 1,
            message: "harmoniser lookup needs ethnicity and ethnicity type columns".to_string(),
        }
        .into());
    }
    Ok(rows)
}

fn parse_item(
    path: &Path,
    line: usize,
    row: &std::collections::BTreeMap<String, String>,
) -> Result<ClassificationDataItem> {
    let display = get_field(row, "display_value");
    let parent = get_field(row, "parent");
    let order_raw = get_field(row, "order");
    let order = order_raw
        .parse::<i64>()
        .map_err(|_| invalid_row(path, line, format!("order is not an integer: {order_raw:?}")))?;
    let required_raw = get_field(row, "required");
    let required = parse_flag(&required_raw)
        .ok_or_else(|| invalid_row(path, line, format!("required is not a flag: {required_raw:?}")))?;
    let parent = if parent.is_empty() { display.clone() } else { parent };
    Ok(ClassificationDataItem::new(display, parent, order, required))
}

fn invalid_row(path: &Path, line: usize, message: String) -> StandardsError {
    StandardsError::InvalidRow {
        path: path.to_path_buf(),
        line,
        message,
    }
}

fn require_columns(
    path: &Path,
    first_row: Option<&std::collections::BTreeMap<String, String>>,
    columns: &[&str],
) -> Result<()> {
    let Some(row) = first_row else {
        return Ok(());
    };
    for column in columns {
        if !row.contains_key(*column) {
            return Err(StandardsError::MissingColumn {
                path: PathBuf::from(path),
                column: (*column).to_string(),
            })
            .with_context(|| format!("load {}", path.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_standards_load() {
        let standards = load_default_standards().expect("load bundled standards");
        assert!(!standards.standardiser.is_empty());
        assert!(standards.classifications.get_classification_by_id("5A").is_some());
        assert_eq!(standards.harmoniser_lookup[0][0], "Ethnicity");
    }
}
