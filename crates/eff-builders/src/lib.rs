//! Flat and cross-tab data built from chart and table descriptions.
//!
//! Descriptions are the objects saved by the chart and table builders. Each
//! builder dispatches on the description's `type`; types it does not know
//! build nothing rather than failing.

pub mod cell;
pub mod chart;
pub mod error;
pub mod export;
pub mod roles;
pub mod table;

pub use cell::{Cell, DataPoint};
pub use chart::{ChartData, ChartDescription, ChartObjectDataBuilder};
pub use error::{BuildError, Result};
pub use roles::{EthnicityRole, is_ethnicity_column};
pub use table::{TableData, TableDescription, TableObjectDataBuilder, TableObjectTableBuilder};
