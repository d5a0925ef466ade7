//! Unit tests for config module

use std::path::PathBuf;

use ocrscrub::config::Correction;
use ocrscrub::{Cleaner, Config};
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(
        config.paths.input,
        PathBuf::from("attar-conference-of-birds/raw.txt")
    );
    assert_eq!(
        config.paths.output,
        PathBuf::from("attar-conference-of-birds/cleaned.txt")
    );
    assert!(config.output.atomic);
    assert!(!config.output.backup);
    assert!(config.corrections.extra.is_empty());
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.paths.input, config.paths.input);
    assert_eq!(parsed.paths.output, config.paths.output);
    assert_eq!(parsed.output.atomic, config.output.atomic);
}

#[test]
fn partial_paths_keep_other_default() {
    let toml_str = r#"
[paths]
input = "rumi/masnavi-raw.txt"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.paths.input, PathBuf::from("rumi/masnavi-raw.txt"));
    assert_eq!(
        config.paths.output,
        PathBuf::from("attar-conference-of-birds/cleaned.txt")
    );
}

#[test]
fn output_config_parses_from_toml() {
    let toml_str = r#"
[output]
atomic = false
backup = true
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(!config.output.atomic);
    assert!(config.output.backup);
}

#[test]
fn extra_corrections_parse_in_order() {
    let toml_str = r#"
[[corrections.extra]]
from = "Simurg"
to = "Simurgh"

[[corrections.extra]]
from = "hoopoe^s"
to = "hoopoe's"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.corrections.extra,
        vec![
            Correction {
                from: "Simurg".to_string(),
                to: "Simurgh".to_string()
            },
            Correction {
                from: "hoopoe^s".to_string(),
                to: "hoopoe's".to_string()
            },
        ]
    );
    assert_eq!(config.corrections.pairs()[0].0, "Simurg");
}

#[test]
fn cleaner_from_config_applies_extra_corrections() {
    let toml_str = r#"
[[corrections.extra]]
from = "Attar"
to = "'Attar"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let mut cleaner = Cleaner::from_config(&config);
    assert_eq!(cleaner.clean("poem by Attar"), "poem by 'Attar");
}

#[test]
fn save_then_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.output.backup = true;
    config.corrections.extra.push(Correction {
        from: "Mantic".to_string(),
        to: "Mantiq".to_string(),
    });
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert!(loaded.output.backup);
    assert_eq!(loaded.corrections.extra, config.corrections.extra);
}

#[test]
fn load_from_reports_parse_errors_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[paths\ninput = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.toml"));
}

#[test]
fn config_path_is_under_home_config() {
    let path = Config::config_path().unwrap();
    assert!(path.ends_with(".config/ocrscrub/config.toml"));
}
