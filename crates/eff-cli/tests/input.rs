//! Reading command inputs from disk.

use std::fs;
use std::path::{Path, PathBuf};

use eff_builders::ChartDescription;
use eff_cli::input::{load_engine_config, read_dataset, read_json, write_rows};
use eff_standards::STANDARDISER_FILE;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "eff-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn standards_dir_overrides_config_file() {
    let dir = unique_temp_dir("config");
    let config_path = dir.join("eff.toml");
    write(
        &config_path,
        "[standards]\nroot = \"lookups\"\n\n[harmoniser]\nwildcard = \"?\"\n",
    );

    let from_file = load_engine_config(Some(&config_path), None).unwrap();
    assert_eq!(
        from_file.standards.standardiser,
        dir.join("lookups").join(STANDARDISER_FILE)
    );
    assert_eq!(from_file.harmoniser.wildcard, '?');

    let overridden = load_engine_config(Some(&config_path), Some(Path::new("/srv/eff"))).unwrap();
    assert_eq!(
        overridden.standards.standardiser,
        Path::new("/srv/eff").join(STANDARDISER_FILE)
    );
    assert_eq!(overridden.harmoniser.wildcard, '?');
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = unique_temp_dir("missing");
    let err = load_engine_config(Some(&dir.join("absent.toml")), None).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn reads_dataset_with_bom_header() {
    let dir = unique_temp_dir("dataset");
    let path = dir.join("data.csv");
    write(&path, "\u{feff}Ethnicity,Value\nWhite,10\nAsian,\"1,200\"\n");

    let dataset = read_dataset(&path).unwrap();
    assert_eq!(dataset.headers(), ["Ethnicity", "Value"]);
    assert_eq!(dataset.ethnicity_values(), vec!["White", "Asian"]);
    assert_eq!(dataset.rows()[1][1], "1,200");
}

#[test]
fn reads_chart_description_json() {
    let dir = unique_temp_dir("chart");
    let path = dir.join("chart.json");
    write(
        &path,
        r#"{"type": "line", "title": {"text": "Rates"}, "series": []}"#,
    );
    let chart: ChartDescription = read_json(&path).unwrap();
    assert_eq!(chart.type_name(), "line");
    assert_eq!(chart.title(), "Rates");

    write(&path, "{not json");
    assert!(read_json::<ChartDescription>(&path).is_err());
}

#[test]
fn writes_rows_as_csv() {
    let rows = vec![
        vec!["Ethnicity".to_string(), "Value".to_string()],
        vec!["Black, African".to_string(), "3".to_string()],
    ];
    let mut out = Vec::new();
    write_rows(&rows, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Ethnicity,Value\n\"Black, African\",3\n"
    );
}
