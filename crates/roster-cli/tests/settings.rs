//! Settings file loading.

use roster_cli::settings::{DisplaySettings, Settings};
use roster_ingest::LoadPolicy;
use roster_model::Language;
use roster_query::QueryConfig;
use tempfile::TempDir;

#[test]
fn save_then_load_keeps_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("roster.toml");
    let settings = Settings {
        query: QueryConfig {
            search_debounce_ms: 150,
        },
        display: DisplaySettings {
            language: Language::Bangla,
            load_policy: LoadPolicy::Lenient,
        },
    };

    settings.save_to(&path).unwrap();
    let loaded = Settings::load(Some(&path)).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[display]\nlanguage = \"klingon\"\n").unwrap();
    let error = Settings::load(Some(&path)).unwrap_err();
    assert!(format!("{error:#}").contains("parse settings"));
}
