//! Where ethnicity sits in a chart or table.

use serde::{Deserialize, Serialize};

/// The part of a chart or table that carries the ethnicity dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthnicityRole {
    /// Each bar of a grouped bar chart or component chart is an ethnicity.
    Bar,
    /// Each group of bars is an ethnicity.
    Group,
    /// Each stacked section of a component chart is an ethnicity.
    Section,
    /// Each line is an ethnicity.
    Line,
    /// Ethnicities run along the x axis.
    XAxis,
    /// Each panel is an ethnicity.
    Panel,
    /// Each table row is an ethnicity.
    Row,
    /// Each table column group is an ethnicity.
    Column,
}

/// Whether a column name refers to ethnicity.
pub fn is_ethnicity_column(name: &str) -> bool {
    name.to_lowercase().contains("ethnic")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ethnicity_columns() {
        assert!(is_ethnicity_column("Ethnicity"));
        assert!(is_ethnicity_column("ethnic group"));
        assert!(!is_ethnicity_column("Gender"));
        assert!(!is_ethnicity_column(""));
    }

    #[test]
    fn roles_serialise_snake_case() {
        assert_eq!(serde_json::to_string(&EthnicityRole::XAxis).unwrap(), r#""x_axis""#);
    }
}
