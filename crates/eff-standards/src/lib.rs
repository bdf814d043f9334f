#![deny(unsafe_code)]

pub mod config;
pub mod csv_utils;
pub mod error;
pub mod loaders;

pub use crate::config::{EngineConfig, StandardsPaths};
pub use crate::csv_utils::{STANDARDS_ENV_VAR, default_standards_root, read_csv_records, read_records};
pub use crate::error::StandardsError;
pub use crate::loaders::{
    CLASSIFICATIONS_FILE, HARMONISER_FILE, STANDARDISER_FILE,
    Standards, load_classifications, load_default_standards, load_harmoniser_lookup,
    load_standardiser, load_standards,
};
