//! Configuration options for harmonising pasted data.

use serde::{Deserialize, Serialize};

/// Options for the harmoniser.
///
/// Rows whose ethnicity has no lookup entry receive `defaults`, one value per
/// appended lookup column. Any default equal to the wildcard is replaced by
/// the row's raw ethnicity value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmoniserConfig {
    pub wildcard: char,
    pub defaults: Vec<String>,
}

impl Default for HarmoniserConfig {
    fn default() -> Self {
        Self {
            wildcard: '*',
            defaults: ["*", "*", "960", "Unclassified"]
                .iter()
                .map(|v| (*v).to_string())
                .collect(),
        }
    }
}

impl HarmoniserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }

    pub fn with_defaults(mut self, defaults: Vec<String>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default values for an unmatched row, with wildcards substituted.
    pub fn defaults_for(&self, raw_ethnicity: &str) -> Vec<String> {
        self.defaults
            .iter()
            .map(|value| {
                if is_wildcard(value, self.wildcard) {
                    raw_ethnicity.to_string()
                } else {
                    value.clone()
                }
            })
            .collect()
    }
}

fn is_wildcard(value: &str, wildcard: char) -> bool {
    let mut chars = value.chars();
    chars.next() == Some(wildcard) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_defaults_take_raw_value() {
        let config = HarmoniserConfig::default();
        assert_eq!(
            config.defaults_for("Martian"),
            vec!["Martian", "Martian", "960", "Unclassified"]
        );
    }

    #[test]
    fn custom_wildcard() {
        let config = HarmoniserConfig::new()
            .with_wildcard('?')
            .with_defaults(vec!["?".to_string(), "*".to_string()]);
        assert_eq!(config.defaults_for("X"), vec!["X", "*"]);
    }
}
