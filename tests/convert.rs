use std::fs;

use figma_tokens_css::{convert_all, convert_file, discover, Config, ConvertError, TokenError};
use tempfile::TempDir;

const LIGHT_DARK: &str = r#"{
    "modes": {"1:0": "Light", "1:1": "Dark"},
    "variables": [
        {
            "name": "Surface/Background",
            "type": "COLOR",
            "resolvedValuesByMode": {
                "1:0": {"resolvedValue": {"r": 1, "g": 1, "b": 1, "a": 1}},
                "1:1": {"resolvedValue": {"r": 0, "g": 0, "b": 0, "a": 0.5}}
            }
        },
        {
            "name": "Radius (Medium)",
            "type": "FLOAT",
            "resolvedValuesByMode": {"1:0": {"resolvedValue": 8}}
        }
    ]
}"#;

fn setup(files: &[(&str, &str)]) -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("figma");
    fs::create_dir(&source).unwrap();
    for (name, contents) in files {
        fs::write(source.join(name), contents).unwrap();
    }
    let config = Config {
        source_dir: source,
        output_dir: dir.path().join("css"),
        ..Config::default()
    };
    (dir, config)
}

#[test]
fn converts_every_export() {
    let (_dir, config) = setup(&[
        ("Theme.json", LIGHT_DARK),
        ("Empty.json", r#"{"modes": {}, "variables": []}"#),
    ]);
    let report = convert_all(&config).unwrap();
    assert!(report.is_success());
    assert_eq!(
        report.written,
        vec![
            config.output_dir.join("empty.css"),
            config.output_dir.join("theme.css"),
        ]
    );
    assert_eq!(
        fs::read_to_string(config.output_dir.join("theme.css")).unwrap(),
        concat!(
            ".light {\n\t--surface-background: rgba(255, 255, 255, 255);\n\t--radius-medium: 8px;\n}\n\n",
            ".dark {\n\t--surface-background: rgba(0, 0, 0, 128);\n}\n\n",
        )
    );
    assert_eq!(
        fs::read_to_string(config.output_dir.join("empty.css")).unwrap(),
        ""
    );
}

#[test]
fn only_matching_extension_is_discovered() {
    let (_dir, config) = setup(&[
        ("b.json", LIGHT_DARK),
        ("a.json", LIGHT_DARK),
        ("notes.txt", "not tokens"),
        ("Upper.JSON", LIGHT_DARK),
    ]);
    fs::create_dir(config.source_dir.join("nested.json")).unwrap();
    let found = discover(&config).unwrap();
    assert_eq!(
        found,
        vec![config.source_dir.join("a.json"), config.source_dir.join("b.json")]
    );
}

#[test]
fn failed_documents_do_not_stop_the_run() {
    let (_dir, config) = setup(&[
        ("a.json", LIGHT_DARK),
        ("broken.json", r#"{"modes": {"1": "Light"}}"#),
        ("c.json", LIGHT_DARK),
    ]);
    let report = convert_all(&config).unwrap();
    assert!(!report.is_success());
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        &report.failed[0],
        ConvertError::Token { path, source: TokenError::Parse(_) }
            if path == &config.source_dir.join("broken.json")
    ));
    assert!(!config.output_dir.join("broken.css").exists());
    assert!(config.output_dir.join("c.css").exists());
}

#[test]
fn fail_fast_returns_first_error() {
    let (_dir, mut config) = setup(&[
        ("a.json", r#"{"modes": {"1": "Light"}, "variables": [
            {"name": "x", "type": "STRING", "resolvedValuesByMode": {"1": {"resolvedValue": 4}}}
        ]}"#),
        ("b.json", LIGHT_DARK),
    ]);
    config.fail_fast = true;
    let err = convert_all(&config).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Token {
            source: TokenError::ValueMismatch { .. },
            ..
        }
    ));
    assert!(!config.output_dir.join("b.css").exists());
}

#[test]
fn missing_source_directory() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        source_dir: dir.path().join("nope"),
        output_dir: dir.path().join("css"),
        ..Config::default()
    };
    assert!(matches!(
        convert_all(&config),
        Err(ConvertError::ReadDir { .. })
    ));
}

#[test]
fn single_file_into_existing_directory() {
    let (_dir, config) = setup(&[("Brand Tokens.json", LIGHT_DARK)]);
    fs::create_dir(&config.output_dir).unwrap();
    let written = convert_file(&config, &config.source_dir.join("Brand Tokens.json")).unwrap();
    assert_eq!(written, config.output_dir.join("brand tokens.css"));
    assert!(fs::read_to_string(written).unwrap().starts_with(".light {\n"));
}
