//! Ordered collection of classifications with best-fit ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classification::Classification;
use crate::standardiser::Standardiser;

/// Classifications in insertion order, unique by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationCollection {
    classifications: Vec<Classification>,
}

impl ClassificationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classification. One with the same id is replaced in place.
    pub fn add_classification(&mut self, classification: Classification) {
        match self
            .classifications
            .iter_mut()
            .find(|existing| existing.id == classification.id)
        {
            Some(existing) => *existing = classification,
            None => self.classifications.push(classification),
        }
    }

    pub fn get_classification_by_id(&self, id: &str) -> Option<&Classification> {
        self.classifications.iter().find(|c| c.id == id)
    }

    pub fn get_classification_by_id_mut(&mut self, id: &str) -> Option<&mut Classification> {
        self.classifications.iter_mut().find(|c| c.id == id)
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    pub fn len(&self) -> usize {
        self.classifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }

    /// Classifications valid for the raw values, best fit first.
    ///
    /// Equal fit levels keep collection order.
    pub fn get_valid_classifications<S: AsRef<str>>(
        &self,
        raw_values: &[S],
        standardiser: &Standardiser,
    ) -> Vec<&Classification> {
        let standard_values = standardiser.standardise_all(raw_values);
        let mut ranked: Vec<(usize, &Classification)> = self
            .classifications
            .iter()
            .filter(|c| c.is_valid_for_standard_ethnicities(&standard_values))
            .map(|c| (c.get_data_fit_level(raw_values, standardiser), c))
            .collect();
        ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
        debug!(
            candidates = self.classifications.len(),
            valid = ranked.len(),
            "ranked classifications"
        );
        ranked.into_iter().map(|(_, c)| c).collect()
    }
}

impl FromIterator<Classification> for ClassificationCollection {
    fn from_iter<T: IntoIterator<Item = Classification>>(iter: T) -> Self {
        let mut collection = Self::new();
        for classification in iter {
            collection.add_classification(classification);
        }
        collection
    }
}
