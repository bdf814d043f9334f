use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, trace};

use eff_builders::chart::{
    ChartSettingsV1, ChartSettingsV2, upgrade_v1_to_v2 as upgrade_chart,
};
use eff_builders::export::write_csv;
use eff_builders::table::{TableSettingsV1, TableSettingsV2, upgrade_v1_to_v2 as upgrade_table};
use eff_builders::{
    Cell, ChartData, ChartDescription, ChartObjectDataBuilder, TableData, TableDescription,
    TableObjectDataBuilder, TableObjectTableBuilder,
};
use eff_classify::{ClassificationFinder, ClassificationMatcher, Harmoniser};
use eff_cli::input::{read_dataset, read_json, write_rows};
use eff_cli::logging::redact_value;
use eff_standards::{EngineConfig, Standards, load_standards};

use crate::cli::{
    ChartArgs, ClassifyArgs, HarmoniseArgs, MatchArgs, OutputFormatArg, StandardiseArgs,
    TableArgs,
};
use crate::summary::{print_classifications, print_standardised};

fn load(config: &EngineConfig) -> Result<Standards> {
    load_standards(&config.standards).context("load standards")
}

pub fn run_standardise(args: &StandardiseArgs, config: &EngineConfig) -> Result<()> {
    let standards = load(config)?;
    let pairs: Vec<(String, String)> = args
        .values
        .iter()
        .map(|raw| (raw.clone(), standards.standardiser.standardise(raw)))
        .collect();
    for (raw, standard) in &pairs {
        trace!(raw = redact_value(raw), standard = redact_value(standard), "standardised");
    }
    if args.json {
        let map: Vec<_> = pairs
            .iter()
            .map(|(raw, standard)| serde_json::json!({"raw": raw, "standard": standard}))
            .collect();
        print_json(&map)
    } else {
        print_standardised(&pairs);
        Ok(())
    }
}

pub fn run_classify(args: &ClassifyArgs, config: &EngineConfig) -> Result<()> {
    let span = info_span!("classify", input = %args.input.display());
    let _guard = span.enter();

    let standards = load(config)?;
    let dataset = read_dataset(&args.input)?;
    let finder = ClassificationFinder::new(standards.standardiser, standards.classifications);
    let outputs = finder.find_classifications_for(&dataset);
    info!(
        rows = dataset.len(),
        classifications = outputs.len(),
        best = %outputs.first().map(|o| o.classification.id.as_str()).unwrap_or_default(),
        "classified dataset"
    );

    if args.json {
        print_json(&outputs)
    } else {
        print_classifications(&outputs);
        Ok(())
    }
}

pub fn run_harmonise(args: &HarmoniseArgs, config: &EngineConfig) -> Result<()> {
    let span = info_span!("harmonise", input = %args.input.display());
    let _guard = span.enter();

    let standards = load(config)?;
    let mut dataset = read_dataset(&args.input)?;
    let harmoniser = Harmoniser::new(&standards.harmoniser_lookup, config.harmoniser.clone());
    harmoniser.process_data(&mut dataset);
    info!(
        rows = dataset.len(),
        appended = harmoniser.appended_headers().len(),
        "harmonised dataset"
    );

    let rows = dataset.into_rows();
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create: {}", path.display()))?;
            write_rows(&rows, BufWriter::new(file))
        }
        None => write_rows(&rows, io::stdout().lock()),
    }
}

pub fn run_match(args: &MatchArgs, config: &EngineConfig) -> Result<()> {
    let standards = load(config)?;
    let matcher = ClassificationMatcher::new(standards.standardiser, standards.classifications);
    if args.builder {
        let builder = matcher.get_builder_classification(&args.id, &args.values)?;
        print_json(&builder)
    } else {
        let link = matcher.get_classification_from_builder_values(&args.id, &args.values)?;
        print_json(&link)
    }
}

pub fn run_chart(args: &ChartArgs) -> Result<()> {
    let description: ChartDescription = read_json(&args.description)?;
    let stdout = io::stdout().lock();
    match &args.upgrade {
        Some(path) => {
            let settings: ChartSettingsV1 = read_json(path)?;
            let upgraded = upgrade_chart(&description, &settings);
            if upgraded.is_none() {
                info!(
                    chart = description.type_name(),
                    settings = ?settings.kind,
                    "chart settings not upgraded, nothing to output"
                );
            }
            emit(upgraded.as_ref(), args.format, stdout)
        }
        None => {
            let built = ChartObjectDataBuilder::build(&description);
            if built.is_none() {
                info!(chart = description.type_name(), "no chart type chosen, nothing to output");
            }
            emit(built.as_ref(), args.format, stdout)
        }
    }
}

pub fn run_table(args: &TableArgs) -> Result<()> {
    let description: TableDescription = read_json(&args.description)?;
    let stdout = io::stdout().lock();
    if let Some(path) = &args.upgrade {
        let settings: TableSettingsV1 = read_json(path)?;
        let upgraded = upgrade_table(&description, &settings);
        if upgraded.is_none() {
            info!(
                table = description.type_name(),
                settings = ?settings.kind,
                "table settings not upgraded, nothing to output"
            );
        }
        return emit(upgraded.as_ref(), args.format, stdout);
    }

    let built = if args.crosstab {
        TableObjectTableBuilder::build(&description)?
    } else {
        TableObjectDataBuilder::build(&description)
    };
    if built.is_none() {
        info!(table = description.type_name(), "no table type chosen, nothing to output");
    }
    emit(built.as_ref(), args.format, stdout)
}

/// Builder outputs whose `data` rows can be written as CSV.
trait FlatData: Serialize {
    fn rows(&self) -> &[Vec<Cell>];
}

impl FlatData for ChartData {
    fn rows(&self) -> &[Vec<Cell>] {
        &self.data
    }
}

impl FlatData for ChartSettingsV2 {
    fn rows(&self) -> &[Vec<Cell>] {
        &self.data
    }
}

impl FlatData for TableData {
    fn rows(&self) -> &[Vec<Cell>] {
        &self.data
    }
}

impl FlatData for TableSettingsV2 {
    fn rows(&self) -> &[Vec<Cell>] {
        &self.data
    }
}

/// Write a builder output. Nothing built is `null` in JSON and no rows in CSV.
fn emit<T: FlatData, W: Write>(
    output: Option<&T>,
    format: OutputFormatArg,
    mut writer: W,
) -> Result<()> {
    match (format, output) {
        (OutputFormatArg::Json, output) => write_json(&mut writer, &output),
        (OutputFormatArg::Csv, Some(output)) => {
            write_csv(output.rows(), writer).context("write csv")?;
            Ok(())
        }
        (OutputFormatArg::Csv, None) => Ok(()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    write_json(io::stdout().lock(), value)
}

fn write_json<T: Serialize + ?Sized, W: Write>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("write json")?;
    writeln!(writer).context("write json")?;
    Ok(())
}
