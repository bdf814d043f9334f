//! Library components of the `eff` command line tool.

pub mod input;
pub mod logging;
