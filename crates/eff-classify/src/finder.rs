//! Classification discovery for raw ethnicity data.

use tracing::debug;

use eff_model::{
    Classification, ClassificationCollection, ClassificationOutput, EthnicityDataSet,
    Standardiser,
};

/// Finds every classification that fits a raw dataset.
#[derive(Debug, Clone)]
pub struct ClassificationFinder {
    standardiser: Standardiser,
    collection: ClassificationCollection,
}

impl ClassificationFinder {
    pub fn new(standardiser: Standardiser, collection: ClassificationCollection) -> Self {
        Self {
            standardiser,
            collection,
        }
    }

    pub fn standardiser(&self) -> &Standardiser {
        &self.standardiser
    }

    pub fn collection(&self) -> &ClassificationCollection {
        &self.collection
    }

    pub fn get_classification_by_id(&self, id: &str) -> Option<&Classification> {
        self.collection.get_classification_by_id(id)
    }

    /// Outputs for every valid classification, best fit first, followed by the
    /// custom classification. The result is never empty.
    pub fn find_classifications<S: AsRef<str>>(&self, raw_values: &[S]) -> Vec<ClassificationOutput> {
        let valid = self
            .collection
            .get_valid_classifications(raw_values, &self.standardiser);
        debug!(
            values = raw_values.len(),
            matched = valid.len(),
            "found classifications"
        );

        let mut outputs: Vec<ClassificationOutput> = valid
            .into_iter()
            .map(|classification| classification.get_outputs(raw_values, &self.standardiser))
            .collect();
        let custom = self.custom_classification(raw_values);
        outputs.push(custom.get_outputs(raw_values, &self.standardiser));
        outputs
    }

    /// Run [`find_classifications`](Self::find_classifications) over a dataset's ethnicity column.
    pub fn find_classifications_for(&self, dataset: &EthnicityDataSet) -> Vec<ClassificationOutput> {
        self.find_classifications(&dataset.ethnicity_values())
    }

    /// Fallback classification built from the standardised raw values.
    pub fn custom_classification<S: AsRef<str>>(&self, raw_values: &[S]) -> Classification {
        Classification::custom(&self.standardiser.standardise_all(raw_values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eff_model::{CUSTOM_CLASSIFICATION_ID, ClassificationDataItem};

    fn finder() -> ClassificationFinder {
        let standardiser =
            Standardiser::from_pairs([("feline", "Cat"), ("canine", "Dog"), ("fish", "Fish")]);
        let mut fm = Classification::new("FM", "Fish and Mammals", "Fish and mammals");
        fm.add_data_item("Mammal", ClassificationDataItem::top_level("Mammal", 1, false));
        fm.add_data_item("Cat", ClassificationDataItem::new("Cat", "Mammal", 2, true));
        fm.add_data_item("Dog", ClassificationDataItem::new("Dog", "Mammal", 3, true));
        fm.add_data_item("Fish", ClassificationDataItem::top_level("Fish", 4, true));
        ClassificationFinder::new(standardiser, [fm].into_iter().collect())
    }

    #[test]
    fn custom_classification_is_always_last() {
        let outputs = finder().find_classifications(&["feline", "canine", "fish"]);
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].classification.id, "FM");
        assert_eq!(outputs[1].classification.id, CUSTOM_CLASSIFICATION_ID);
    }

    #[test]
    fn unmatched_values_still_get_custom_classification() {
        let outputs = finder().find_classifications(&["Martian", "feline"]);
        assert_eq!(outputs.len(), 1);
        let custom = &outputs[0];
        assert_eq!(custom.classification.id, CUSTOM_CLASSIFICATION_ID);
        assert_eq!(custom.data[0].display_value, "Martian");
        assert_eq!(custom.data[1].display_value, "Cat");
        assert_eq!(custom.data[1].order, Some(1));
    }

    #[test]
    fn empty_input_still_returns_custom() {
        let outputs = finder().find_classifications::<&str>(&[]);
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].data.is_empty());
    }
}
