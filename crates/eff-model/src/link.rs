//! Classification links between builder tools and persisted pages.
//!
//! Chart and table builders report their classification choice using
//! `has_*` flags, while persisted dimensions store `includes_*` flags. The
//! two vocabularies are kept as separate types joined by
//! [`ClassificationLink::from_builder`] and [`BuilderClassification::from_link`].

use serde::{Deserialize, Serialize};

/// Builder-facing classification choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderClassification {
    pub id: String,
    pub has_parents: bool,
    pub has_all: bool,
    pub has_unknown: bool,
}

/// Persistence-facing classification link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationLink {
    pub classification_id: String,
    pub includes_parents: bool,
    pub includes_all: bool,
    pub includes_unknown: bool,
}

impl ClassificationLink {
    pub fn new(classification_id: impl Into<String>) -> Self {
        Self {
            classification_id: classification_id.into(),
            includes_parents: false,
            includes_all: false,
            includes_unknown: false,
        }
    }

    pub fn from_builder(builder: &BuilderClassification) -> Self {
        Self {
            classification_id: builder.id.clone(),
            includes_parents: builder.has_parents,
            includes_all: builder.has_all,
            includes_unknown: builder.has_unknown,
        }
    }
}

impl BuilderClassification {
    pub fn from_link(link: &ClassificationLink) -> Self {
        Self {
            id: link.classification_id.clone(),
            has_parents: link.includes_parents,
            has_all: link.includes_all,
            has_unknown: link.includes_unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabularies_map_field_for_field() {
        let builder = BuilderClassification {
            id: "5A".to_string(),
            has_parents: true,
            has_all: false,
            has_unknown: true,
        };
        let link = ClassificationLink::from_builder(&builder);
        assert_eq!(link.classification_id, "5A");
        assert!(link.includes_parents);
        assert!(!link.includes_all);
        assert!(link.includes_unknown);
        assert_eq!(BuilderClassification::from_link(&link), builder);
    }

    #[test]
    fn link_serializes_with_persisted_names() {
        let json = serde_json::to_value(ClassificationLink::new("2A")).expect("serialize link");
        assert_eq!(
            json,
            serde_json::json!({
                "classification_id": "2A",
                "includes_parents": false,
                "includes_all": false,
                "includes_unknown": false
            })
        );
    }
}
