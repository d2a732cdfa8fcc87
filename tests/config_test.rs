//! Integration tests for Settings layered loading.
//!
//! Layers (lowest to highest): defaults, global file, explicit file, env vars.
//! Env vars are passed as an explicit map so tests never touch the process
//! environment.

use std::fs;

use config::Map;
use tempfile::TempDir;

use dsakit::application::ApplicationError;
use dsakit::config::Settings;
use dsakit::ListKind;

fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn given_no_files_when_load_then_defaults() {
    let settings = Settings::load_layers(None, None, env(&[])).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("dsakit.toml");
    fs::write(
        &global,
        r#"
default_kind = "linked"

[fixtures]
render_missing = false
"#,
    )
    .unwrap();

    let settings = Settings::load_layers(Some(&global), None, env(&[])).expect("load settings");
    assert_eq!(settings.default_kind, ListKind::Linked);
    assert!(!settings.fixtures.render_missing);
}

#[test]
fn given_missing_global_file_when_load_then_ignored() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("absent.toml");

    let settings = Settings::load_layers(Some(&global), None, env(&[])).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_explicit_file_when_load_then_wins_over_global() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&global, "default_kind = \"linked\"\n").unwrap();
    fs::write(&explicit, "default_kind = \"ring\"\n").unwrap();

    let settings =
        Settings::load_layers(Some(&global), Some(&explicit), env(&[])).expect("load settings");
    assert_eq!(settings.default_kind, ListKind::Ring);
    // untouched keys keep their defaults
    assert!(settings.fixtures.render_missing);
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("nope.toml");

    let result = Settings::load_layers(None, Some(&explicit), env(&[]));
    assert!(
        matches!(result, Err(ApplicationError::Config { ref message }) if message.contains("not found")),
        "unexpected: {:?}",
        result
    );
}

#[test]
fn given_unknown_kind_in_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("bad.toml");
    fs::write(&explicit, "default_kind = \"skiplist\"\n").unwrap();

    let result = Settings::load_layers(None, Some(&explicit), env(&[]));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_env_vars_when_load_then_override_files() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "default_kind = \"linked\"\n").unwrap();

    let settings = Settings::load_layers(
        None,
        Some(&explicit),
        env(&[
            ("DSAKIT_DEFAULT_KIND", "ring"),
            ("DSAKIT_FIXTURES__RENDER_MISSING", "false"),
            ("OTHER_VAR", "ignored"),
        ]),
    )
    .expect("load settings");

    assert_eq!(settings.default_kind, ListKind::Ring);
    assert!(!settings.fixtures.render_missing);
}

#[test]
fn given_loaded_settings_when_to_toml_then_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.toml");
    let settings = Settings {
        default_kind: ListKind::Ring,
        ..Default::default()
    };
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    let loaded = Settings::load_layers(None, Some(&path), env(&[])).expect("load settings");
    assert_eq!(loaded, settings);
}
