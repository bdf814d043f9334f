//! Ethnicity classification data model.

pub mod classification;
pub mod collection;
pub mod dataset;
pub mod error;
pub mod link;
pub mod options;
pub mod standardiser;

pub use classification::{
    CUSTOM_CLASSIFICATION_ID, Classification, ClassificationDataItem, ClassificationOutput,
    ClassificationSummary, EthnicityOutput,
};
pub use collection::ClassificationCollection;
pub use dataset::EthnicityDataSet;
pub use error::{ModelError, Result};
pub use link::{BuilderClassification, ClassificationLink};
pub use options::HarmoniserConfig;
pub use standardiser::{STANDARD_ALL, STANDARD_UNKNOWN, Standardiser};
