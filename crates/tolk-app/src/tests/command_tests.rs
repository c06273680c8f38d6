use std::fs;

use tempfile::TempDir;
use tolk_config::Config;
use tolk_config::table::DelimiterSetting;

use crate::cli::Command;
use crate::{Status, execute, load_table};

fn fixture(body: &str) -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, body).unwrap();

    let mut config = Config::default();
    config.table.words_path = path;
    (dir, config)
}

fn run(command: Command, config: &Config, json: bool) -> (Status, String) {
    let (table, _) = load_table(config).unwrap();
    let mut out = Vec::new();
    let status = execute(&command, &table, json, &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

const WORDS: &str = "English\tFrench\tGerman\nhello\tbonjour\thallo\ncat\tchat\n";

#[test]
fn test_languages() {
    let (_dir, config) = fixture(WORDS);
    let (status, output) = run(Command::Languages, &config, false);

    assert_eq!(status, Status::Success);
    assert_eq!(output, "French\nGerman\n");
}

#[test]
fn test_languages_json() {
    let (_dir, config) = fixture(WORDS);
    let (_, output) = run(Command::Languages, &config, true);

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["languages"], serde_json::json!(["French", "German"]));
    assert_eq!(value["entry_count"], 2);
}

#[test]
fn test_words_sorted() {
    let (_dir, config) = fixture(WORDS);
    let (_, output) = run(Command::Words, &config, false);
    assert_eq!(output, "cat\nhello\n");
}

#[test]
fn test_translate_found_and_empty() {
    let (_dir, config) = fixture(WORDS);

    let (status, output) = run(
        Command::Translate {
            word: "Hello".to_string(),
            to: "german".to_string(),
        },
        &config,
        false,
    );
    assert_eq!(status, Status::Success);
    assert_eq!(output, "hallo\n");

    let (status, output) = run(
        Command::Translate {
            word: "cat".to_string(),
            to: "German".to_string(),
        },
        &config,
        false,
    );
    assert_eq!(status, Status::Success);
    assert_eq!(output, "'cat' has no German translation recorded\n");
}

#[test]
fn test_translate_failures_json() {
    let (_dir, config) = fixture(WORDS);

    let (status, output) = run(
        Command::Translate {
            word: "bye".to_string(),
            to: "French".to_string(),
        },
        &config,
        true,
    );
    assert_eq!(status, Status::LookupFailed);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["error"], "word_not_found");

    let (status, output) = run(
        Command::Translate {
            word: "hello".to_string(),
            to: "Spanish".to_string(),
        },
        &config,
        true,
    );
    assert_eq!(status, Status::LookupFailed);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["error"], "language_not_supported");
}

#[test]
fn test_config_options_reach_loader() {
    let (_dir, mut config) = fixture("English;French;Spanish\nhello;bonjour;hola\n");
    config.table.delimiter = DelimiterSetting::Semicolon;
    config.table.languages = vec!["spanish".to_string()];

    let (_, output) = run(Command::Languages, &config, false);
    assert_eq!(output, "Spanish\n");
}

#[test]
fn test_load_failure_has_context() {
    let (_dir, mut config) = fixture(WORDS);
    config.table.words_path = config.table.words_path.with_file_name("missing.txt");

    let err = load_table(&config).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load vocabulary from"));
    assert!(format!("{err:#}").contains("File not found"));
}
