//! Raw ethnicity label standardisation.
//!
//! A [`Standardiser`] is a flat lookup from a cleaned raw label (trimmed and
//! lower-cased) to its canonical standard label. Lookups never fail: a label
//! with no conversion is returned exactly as it was supplied.
//!
//! ```text
//! " Feline " -> "feline" -> "Cat"
//! "FELINE"   -> "feline" -> "Cat"
//! "Lizard"   -> "lizard" -> (miss) -> "Lizard"
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Canonical standard label for an "all ethnicities" total row.
pub const STANDARD_ALL: &str = "All";

/// Canonical standard label for rows with unrecorded ethnicity.
pub const STANDARD_UNKNOWN: &str = "Unknown";

/// Maps raw, free-text ethnicity labels to standard labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standardiser {
    /// Key: cleaned raw label. Value: standard label.
    standards: BTreeMap<String, String>,
}

impl Standardiser {
    /// Create an empty standardiser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a standardiser from `(raw, standard)` pairs.
    pub fn from_pairs<I, R, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, S)>,
        R: AsRef<str>,
        S: Into<String>,
    {
        let mut standardiser = Self::new();
        for (raw, standard) in pairs {
            standardiser.add_conversion(raw.as_ref(), standard);
        }
        standardiser
    }

    /// Insert or overwrite the conversion for `raw`.
    pub fn add_conversion(&mut self, raw: &str, standard: impl Into<String>) {
        self.standards.insert(clean(raw), standard.into());
    }

    /// Standardise one raw label, returning the input unchanged on a miss.
    pub fn standardise(&self, raw: &str) -> String {
        match self.standards.get(&clean(raw)) {
            Some(standard) => standard.clone(),
            None => raw.to_string(),
        }
    }

    /// Standardise every label, preserving order and duplicates.
    pub fn standardise_all<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        raw.iter().map(|value| self.standardise(value.as_ref())).collect()
    }

    /// Distinct standard labels for a raw list.
    pub fn standard_set<S: AsRef<str>>(&self, raw: &[S]) -> BTreeSet<String> {
        raw.iter().map(|value| self.standardise(value.as_ref())).collect()
    }

    /// Whether a conversion exists for `raw`.
    pub fn has_conversion(&self, raw: &str) -> bool {
        self.standards.contains_key(&clean(raw))
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}

fn clean(raw: &str) -> String {
    raw.trim().to_lowercase()
}
