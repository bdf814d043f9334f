//! Harmonising pasted data against a lookup table.
//!
//! The lookup is a table whose first two columns are the raw ethnicity and
//! ethnicity type, followed by any number of columns to append to matching
//! data rows:
//!
//! ```text
//! Ethnicity,Ethnicity type,Standardised ethnicity,Parent,Order,...
//! white british,,White British,White,1010,...
//! british,ons 2011 18+1,White British,White,1010,...
//! ```
//!
//! Rows are matched on the cleaned (trimmed, lower-cased) ethnicity and type.
//! When the exact type has no entry, the entry with a blank type is used.
//! Unmatched rows receive the configured defaults.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use eff_model::{EthnicityDataSet, HarmoniserConfig};

#[derive(Debug, Clone)]
pub struct Harmoniser {
    config: HarmoniserConfig,
    appended_headers: Vec<String>,
    /// Key: cleaned ethnicity, then cleaned ethnicity type.
    lookup: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl Harmoniser {
    /// Build a harmoniser from lookup rows (header row first).
    pub fn new(lookup_rows: &[Vec<String>], config: HarmoniserConfig) -> Self {
        let Some((header, rows)) = lookup_rows.split_first() else {
            warn!("harmoniser lookup is empty");
            return Self {
                config,
                appended_headers: Vec::new(),
                lookup: BTreeMap::new(),
            };
        };
        let appended_headers: Vec<String> = header.iter().skip(2).cloned().collect();
        if config.defaults.len() != appended_headers.len() {
            warn!(
                defaults = config.defaults.len(),
                columns = appended_headers.len(),
                "harmoniser defaults do not match lookup columns"
            );
        }

        let mut lookup: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
        for row in rows {
            let Some(ethnicity) = row.first() else {
                continue;
            };
            let ethnicity_type = row.get(1).map(String::as_str).unwrap_or_default();
            let values = fit_width(row.iter().skip(2).cloned().collect(), appended_headers.len());
            lookup
                .entry(clean(ethnicity))
                .or_default()
                .insert(clean(ethnicity_type), values);
        }

        Self {
            config,
            appended_headers,
            lookup,
        }
    }

    /// Names of the columns appended to every row.
    pub fn appended_headers(&self) -> &[String] {
        &self.appended_headers
    }

    /// Lookup values for an ethnicity and optional ethnicity type.
    pub fn lookup(&self, ethnicity: &str, ethnicity_type: Option<&str>) -> Option<&[String]> {
        let by_type = self.lookup.get(&clean(ethnicity))?;
        ethnicity_type
            .and_then(|value| by_type.get(&clean(value)))
            .or_else(|| by_type.get(""))
            .map(Vec::as_slice)
    }

    /// Values appended to a row with this ethnicity and type.
    pub fn values_for(&self, ethnicity: &str, ethnicity_type: Option<&str>) -> Vec<String> {
        match self.lookup(ethnicity, ethnicity_type) {
            Some(values) => values.to_vec(),
            None => fit_width(self.config.defaults_for(ethnicity), self.appended_headers.len()),
        }
    }

    /// Append the lookup columns to every row of the dataset.
    pub fn process_data(&self, dataset: &mut EthnicityDataSet) {
        let ethnicity_column = dataset.ethnicity_column();
        let type_column = dataset.ethnicity_type_column();
        let width = dataset.headers().len();

        let mut unmatched = 0usize;
        for row in dataset.rows_mut() {
            // Pad short rows so appended columns line up with the headers.
            if row.len() < width {
                row.resize(width, String::new());
            }
            let ethnicity = row.get(ethnicity_column).cloned().unwrap_or_default();
            let ethnicity_type = type_column.and_then(|idx| row.get(idx)).map(String::as_str);
            if self.lookup(&ethnicity, ethnicity_type).is_none() {
                unmatched += 1;
            }
            let values = self.values_for(&ethnicity, ethnicity_type);
            row.extend(values);
        }
        dataset
            .headers_mut()
            .extend(self.appended_headers.iter().cloned());
        debug!(rows = dataset.len(), unmatched, "harmonised dataset");
    }

    /// Harmonise header-first rows and return them, header first.
    pub fn process_rows(&self, rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
        match EthnicityDataSet::new(rows) {
            Ok(mut dataset) => {
                self.process_data(&mut dataset);
                dataset.into_rows()
            }
            Err(_) => Vec::new(),
        }
    }
}

fn clean(value: &str) -> String {
    value.trim().to_lowercase()
}

fn fit_width(mut values: Vec<String>, width: usize) -> Vec<String> {
    values.resize(width, String::new());
    values
}
