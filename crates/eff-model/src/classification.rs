//! Ethnicity classification schemes.
//!
//! A [`Classification`] maps **standard** labels to display items. Several
//! standard labels may share one display item, which is how values such as
//! "Other" and "Reptile" both roll up to a display value of "Other".
//!
//! ## Validity
//!
//! A classification is valid for a set of standard labels when
//!
//! 1. every standard label has a mapping (one unmapped label rejects the whole
//!    classification), and
//! 2. every **required** display value is derived from at least one label.
//!
//! Optional display values (aggregates such as "Mammal") may be present or
//! absent freely.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::standardiser::Standardiser;

/// Identifier of the synthetic classification built from whatever values are present.
pub const CUSTOM_CLASSIFICATION_ID: &str = "custom";

/// Display name of the synthetic custom classification.
pub const CUSTOM_CLASSIFICATION_NAME: &str = "[Custom]";

/// One display row of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDataItem {
    /// Label shown to users.
    pub display_value: String,
    /// Parent display label. Equal to `display_value` for top-level items.
    pub parent: String,
    /// Sort order within the classification.
    pub order: i64,
    /// Whether data must contain this display value to fit the classification.
    pub required: bool,
}

impl ClassificationDataItem {
    pub fn new(
        display_value: impl Into<String>,
        parent: impl Into<String>,
        order: i64,
        required: bool,
    ) -> Self {
        Self {
            display_value: display_value.into(),
            parent: parent.into(),
            order,
            required,
        }
    }

    /// Top-level item whose parent is itself.
    pub fn top_level(display_value: impl Into<String>, order: i64, required: bool) -> Self {
        let display_value = display_value.into();
        Self {
            parent: display_value.clone(),
            display_value,
            order,
            required,
        }
    }

    pub fn has_parent(&self) -> bool {
        self.parent != self.display_value
    }
}

/// A named ethnicity classification scheme (e.g. "5A+", "ONS 2011 - 5+1").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub id: String,
    pub short_name: String,
    pub long_name: String,
    /// Key: standard label.
    items: BTreeMap<String, ClassificationDataItem>,
}

/// Per-value result row produced by [`Classification::get_outputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthnicityOutput {
    pub raw_value: String,
    pub standard_value: String,
    pub display_value: String,
    pub parent: String,
    /// `None` when the standard value has no mapping in the classification.
    pub order: Option<i64>,
}

/// Classification metadata block of a result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub map: BTreeMap<String, ClassificationDataItem>,
}

/// Result payload for one classification over one raw dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationOutput {
    pub classification: ClassificationSummary,
    pub data: Vec<EthnicityOutput>,
}

impl Classification {
    pub fn new(
        id: impl Into<String>,
        short_name: impl Into<String>,
        long_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            short_name: short_name.into(),
            long_name: long_name.into(),
            items: BTreeMap::new(),
        }
    }

    /// Build the synthetic fallback classification from a list of values.
    ///
    /// Every distinct value becomes its own required, top-level item, ordered
    /// by the index of its first occurrence.
    pub fn custom<S: AsRef<str>>(values: &[S]) -> Self {
        let mut classification = Self::new(
            CUSTOM_CLASSIFICATION_ID,
            CUSTOM_CLASSIFICATION_NAME,
            CUSTOM_CLASSIFICATION_NAME,
        );
        for (index, value) in values.iter().enumerate() {
            let value = value.as_ref();
            if classification.items.contains_key(value) {
                continue;
            }
            let order = i64::try_from(index).unwrap_or(i64::MAX);
            classification
                .items
                .insert(value.to_string(), ClassificationDataItem::top_level(value, order, true));
        }
        classification
    }

    /// Map a standard label to a display item, replacing any previous mapping.
    pub fn add_data_item(
        &mut self,
        standard_value: impl Into<String>,
        item: ClassificationDataItem,
    ) {
        self.items.insert(standard_value.into(), item);
    }

    pub fn get_item(&self, standard_value: &str) -> Option<&ClassificationDataItem> {
        self.items.get(standard_value)
    }

    pub fn items(&self) -> &BTreeMap<String, ClassificationDataItem> {
        &self.items
    }

    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_CLASSIFICATION_ID
    }

    /// All display values of the classification.
    pub fn display_values(&self) -> BTreeSet<&str> {
        self.items.values().map(|item| item.display_value.as_str()).collect()
    }

    /// Display values that data must contain for the classification to fit.
    pub fn required_display_values(&self) -> BTreeSet<&str> {
        self.items
            .values()
            .filter(|item| item.required)
            .map(|item| item.display_value.as_str())
            .collect()
    }

    /// Parent labels of items that sit below another item.
    pub fn parent_values(&self) -> BTreeSet<&str> {
        self.items
            .values()
            .filter(|item| item.has_parent())
            .map(|item| item.parent.as_str())
            .collect()
    }

    /// True when any item's parent differs from its own display value.
    pub fn has_parent_child_relationship(&self) -> bool {
        self.items.values().any(ClassificationDataItem::has_parent)
    }

    /// Display values derivable from the given standard labels. Unmapped labels are skipped.
    pub fn display_values_for<I, S>(&self, standard_values: I) -> BTreeSet<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        standard_values
            .into_iter()
            .filter_map(|value| self.items.get(value.as_ref()))
            .map(|item| item.display_value.as_str())
            .collect()
    }

    pub fn is_valid_for_standard_ethnicities<I, S>(&self, standard_values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut displays = BTreeSet::new();
        for value in standard_values {
            match self.items.get(value.as_ref()) {
                Some(item) => {
                    displays.insert(item.display_value.as_str());
                }
                None => return false,
            }
        }
        self.required_display_values()
            .iter()
            .all(|required| displays.contains(required))
    }

    pub fn is_valid_for_raw_ethnicities<S: AsRef<str>>(
        &self,
        raw_values: &[S],
        standardiser: &Standardiser,
    ) -> bool {
        self.is_valid_for_standard_ethnicities(standardiser.standardise_all(raw_values))
    }

    /// Number of raw values whose standard form is one of this classification's
    /// display values. Values only reachable through a roll-up (e.g. "Reptile"
    /// shown as "Other") do not count.
    pub fn get_data_fit_level<S: AsRef<str>>(
        &self,
        raw_values: &[S],
        standardiser: &Standardiser,
    ) -> usize {
        let displays = self.display_values();
        raw_values
            .iter()
            .filter(|raw| displays.contains(standardiser.standardise(raw.as_ref()).as_str()))
            .count()
    }

    pub fn summary(&self) -> ClassificationSummary {
        ClassificationSummary {
            id: self.id.clone(),
            name: self.long_name.clone(),
            short_name: self.short_name.clone(),
            map: self.items.clone(),
        }
    }

    /// Result payload: classification metadata plus one row per raw value.
    pub fn get_outputs<S: AsRef<str>>(
        &self,
        raw_values: &[S],
        standardiser: &Standardiser,
    ) -> ClassificationOutput {
        let data = raw_values
            .iter()
            .map(|raw| {
                let raw = raw.as_ref();
                let standard_value = standardiser.standardise(raw);
                match self.items.get(&standard_value) {
                    Some(item) => EthnicityOutput {
                        raw_value: raw.to_string(),
                        display_value: item.display_value.clone(),
                        parent: item.parent.clone(),
                        order: Some(item.order),
                        standard_value,
                    },
                    None => EthnicityOutput {
                        raw_value: raw.to_string(),
                        display_value: standard_value.clone(),
                        parent: standard_value.clone(),
                        order: None,
                        standard_value,
                    },
                }
            })
            .collect();
        ClassificationOutput {
            classification: self.summary(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> Standardiser {
        Standardiser::from_pairs([
            ("feline", "Cat"),
            ("canine", "Dog"),
            ("fish", "Fish"),
            ("mammal", "Mammal"),
            ("lizard", "Reptile"),
        ])
    }

    fn fish_and_mammals() -> Classification {
        let mut classification = Classification::new("FM", "Fish and Mammals", "Fish and Mammals");
        classification.add_data_item("Mammal", ClassificationDataItem::top_level("Mammal", 1, false));
        classification.add_data_item("Cat", ClassificationDataItem::new("Cat", "Mammal", 2, true));
        classification.add_data_item("Dog", ClassificationDataItem::new("Dog", "Mammal", 3, true));
        classification.add_data_item("Fish", ClassificationDataItem::top_level("Fish", 4, true));
        classification
    }

    #[test]
    fn valid_without_optional_aggregate() {
        let classification = fish_and_mammals();
        assert!(classification.is_valid_for_raw_ethnicities(&["feline", "canine", "fish"], &pets()));
    }

    #[test]
    fn adding_optional_value_keeps_validity() {
        let classification = fish_and_mammals();
        assert!(classification.is_valid_for_standard_ethnicities(["Cat", "Dog", "Fish", "Mammal"]));
    }

    #[test]
    fn unmapped_value_invalidates() {
        let classification = fish_and_mammals();
        assert!(!classification.is_valid_for_standard_ethnicities(["Cat", "Dog", "Fish", "Reptile"]));
    }

    #[test]
    fn missing_required_value_invalidates() {
        let classification = fish_and_mammals();
        assert!(!classification.is_valid_for_standard_ethnicities(["Cat", "Fish"]));
    }

    #[test]
    fn outputs_carry_display_parent_and_order() {
        let output = fish_and_mammals().get_outputs(&["feline", "canine", "fish"], &pets());
        assert_eq!(output.classification.id, "FM");
        assert_eq!(
            output.data[0],
            EthnicityOutput {
                raw_value: "feline".to_string(),
                standard_value: "Cat".to_string(),
                display_value: "Cat".to_string(),
                parent: "Mammal".to_string(),
                order: Some(2),
            }
        );
        assert_eq!(output.data[2].parent, "Fish");
    }

    #[test]
    fn fit_level_counts_values_shown_as_themselves() {
        let mut classification = fish_and_mammals();
        classification.add_data_item("Reptile", ClassificationDataItem::top_level("Other", 5, false));
        let raw = ["feline", "lizard", "fish", "fish"];
        assert!(classification.is_valid_for_raw_ethnicities(&["feline", "canine", "lizard", "fish"], &pets()));
        assert_eq!(classification.get_data_fit_level(&raw, &pets()), 3);
    }

    #[test]
    fn parent_child_structure_detection() {
        assert!(fish_and_mammals().has_parent_child_relationship());
        let flat = Classification::custom(&["a", "b"]);
        assert!(!flat.has_parent_child_relationship());
    }

    #[test]
    fn custom_classification_dedupes_in_first_occurrence_order() {
        let custom = Classification::custom(&["White", "Black", "White", "Asian"]);
        assert!(custom.is_custom());
        assert_eq!(custom.items().len(), 3);
        assert_eq!(custom.get_item("White").map(|i| i.order), Some(0));
        assert_eq!(custom.get_item("Black").map(|i| i.order), Some(1));
        assert_eq!(custom.get_item("Asian").map(|i| i.order), Some(3));
        assert!(custom.items().values().all(|item| item.required && !item.has_parent()));
    }
}
