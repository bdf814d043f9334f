//! Reading command inputs and engine configuration.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use eff_model::EthnicityDataSet;
use eff_standards::{EngineConfig, read_csv_records};

/// Engine configuration from an optional TOML file, with an optional
/// standards directory taking precedence over the file's paths.
pub fn load_engine_config(
    config_path: Option<&Path>,
    standards_dir: Option<&Path>,
) -> Result<EngineConfig> {
    let config = match config_path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("load config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(match standards_dir {
        Some(dir) => config.with_standards_root(dir),
        None => config,
    })
}

/// A dataset from a CSV file whose first record is the header.
pub fn read_dataset(path: &Path) -> Result<EthnicityDataSet> {
    let rows = read_csv_records(path)?;
    let dataset = EthnicityDataSet::new(rows)
        .with_context(|| format!("read dataset: {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.headers().len(),
        "read dataset"
    );
    Ok(dataset)
}

/// A JSON document deserialized into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("open: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse json: {}", path.display()))
}

/// Write string rows as CSV.
pub fn write_rows<W: Write>(rows: &[Vec<String>], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    for row in rows {
        writer.write_record(row).context("write csv record")?;
    }
    writer.flush().context("flush csv output")?;
    Ok(())
}
