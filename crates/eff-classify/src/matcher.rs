//! Reconciling builder classification choices with the classification catalogue.
//!
//! Chart and table builders report a classification id, optionally suffixed
//! with `+` when parent groups were included, plus the raw values the user
//! entered. The matcher resolves the id and derives the three inclusion flags
//! from the values themselves:
//!
//! - `includes_all`: the standard values contain "All"
//! - `includes_unknown`: the standard values contain "Unknown"
//! - `includes_parents`: the classification has parent/child structure and
//!   every parent implied by its required children is present in the data

use std::collections::BTreeSet;

use tracing::debug;

use eff_model::{
    BuilderClassification, Classification, ClassificationCollection, ClassificationLink,
    STANDARD_ALL, STANDARD_UNKNOWN, Standardiser,
};

use crate::error::{MatchError, Result};

/// Read access to persisted classifications.
pub trait ClassificationRepository {
    fn get_classification_by_id(&self, id: &str) -> Option<&Classification>;
}

impl ClassificationRepository for ClassificationCollection {
    fn get_classification_by_id(&self, id: &str) -> Option<&Classification> {
        ClassificationCollection::get_classification_by_id(self, id)
    }
}

impl<R: ClassificationRepository + ?Sized> ClassificationRepository for &R {
    fn get_classification_by_id(&self, id: &str) -> Option<&Classification> {
        (**self).get_classification_by_id(id)
    }
}

pub struct ClassificationMatcher<R> {
    standardiser: Standardiser,
    repository: R,
}

impl<R: ClassificationRepository> ClassificationMatcher<R> {
    pub fn new(standardiser: Standardiser, repository: R) -> Self {
        Self {
            standardiser,
            repository,
        }
    }

    /// Build the persisted link for a builder's classification id and values.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ClassificationNotFound`] when neither the
    /// stripped nor the supplied id names a classification.
    pub fn get_classification_from_builder_values<S: AsRef<str>>(
        &self,
        id: &str,
        values: &[S],
    ) -> Result<ClassificationLink> {
        let standard_values = self.standardiser.standard_set(values);
        let classification = self.resolve(id)?;

        let link = ClassificationLink {
            classification_id: classification.id.clone(),
            includes_parents: includes_parents(classification, &standard_values),
            includes_all: standard_values.contains(STANDARD_ALL),
            includes_unknown: standard_values.contains(STANDARD_UNKNOWN),
        };
        debug!(
            builder_id = id,
            classification = %link.classification_id,
            includes_parents = link.includes_parents,
            includes_all = link.includes_all,
            includes_unknown = link.includes_unknown,
            "matched builder classification"
        );
        Ok(link)
    }

    /// Same as [`get_classification_from_builder_values`](Self::get_classification_from_builder_values),
    /// reported in the builder's `has_*` vocabulary.
    pub fn get_builder_classification<S: AsRef<str>>(
        &self,
        id: &str,
        values: &[S],
    ) -> Result<BuilderClassification> {
        self.get_classification_from_builder_values(id, values)
            .map(|link| BuilderClassification::from_link(&link))
    }

    fn resolve(&self, id: &str) -> Result<&Classification> {
        let stripped = id.strip_suffix('+').unwrap_or(id);
        self.repository
            .get_classification_by_id(stripped)
            .or_else(|| self.repository.get_classification_by_id(id))
            .ok_or_else(|| MatchError::ClassificationNotFound { id: id.to_string() })
    }
}

fn includes_parents(classification: &Classification, standard_values: &BTreeSet<String>) -> bool {
    if !classification.has_parent_child_relationship() {
        return false;
    }
    let required_parents: BTreeSet<&str> = classification
        .items()
        .values()
        .filter(|item| item.required && item.has_parent())
        .map(|item| item.parent.as_str())
        .collect();
    let parents = if required_parents.is_empty() {
        classification.parent_values()
    } else {
        required_parents
    };
    let present = classification.display_values_for(standard_values);
    parents.iter().all(|parent| present.contains(parent))
}
