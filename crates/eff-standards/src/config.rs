//! Engine configuration loaded from an optional TOML file.
//!
//! ```toml
//! [standards]
//! root = "standards"
//! classifications = "standards/classifications-2021.csv"
//!
//! [harmoniser]
//! wildcard = "*"
//! defaults = ["*", "*", "960", "Unclassified"]
//! ```
//!
//! Every key is optional. Relative paths are resolved against the directory
//! containing the config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use eff_model::HarmoniserConfig;

use crate::error::StandardsError;
use crate::loaders::{CLASSIFICATIONS_FILE, HARMONISER_FILE, STANDARDISER_FILE};

/// Resolved locations of the lookup files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardsPaths {
    pub standardiser: PathBuf,
    pub classifications: PathBuf,
    pub harmoniser: PathBuf,
}

impl StandardsPaths {
    /// Standard file names inside one directory.
    pub fn in_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            standardiser: root.join(STANDARDISER_FILE),
            classifications: root.join(CLASSIFICATIONS_FILE),
            harmoniser: root.join(HARMONISER_FILE),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StandardsSection {
    root: Option<PathBuf>,
    standardiser: Option<PathBuf>,
    classifications: Option<PathBuf>,
    harmoniser: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    standards: StandardsSection,
    harmoniser: HarmoniserConfig,
}

/// Engine configuration after defaults and path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub standards: StandardsPaths,
    pub harmoniser: HarmoniserConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            standards: StandardsPaths::in_root(crate::default_standards_root()),
            harmoniser: HarmoniserConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&text, base).map_err(|source| StandardsError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration text, resolving relative paths against `base`.
    pub fn from_toml_str(text: &str, base: &Path) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };

        let root = file
            .standards
            .root
            .map(resolve)
            .unwrap_or_else(crate::default_standards_root);
        let defaults = StandardsPaths::in_root(&root);
        let standards = StandardsPaths {
            standardiser: file.standards.standardiser.map(resolve).unwrap_or(defaults.standardiser),
            classifications: file
                .standards
                .classifications
                .map(resolve)
                .unwrap_or(defaults.classifications),
            harmoniser: file.standards.harmoniser.map(resolve).unwrap_or(defaults.harmoniser),
        };
        Ok(Self {
            standards,
            harmoniser: file.harmoniser,
        })
    }

    /// Point every lookup file at `root`, overriding earlier settings.
    #[must_use]
    pub fn with_standards_root(mut self, root: impl AsRef<Path>) -> Self {
        self.standards = StandardsPaths::in_root(root);
        self
    }
}
