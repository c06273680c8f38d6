//! File-based loading tests for the translation table

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tolk_core::{
    Delimiter, LoadError, LoadOptions, TableLoader, TranslateError, TranslationTable, Translator,
};

fn write_words(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_load_tab_separated_file() {
    let dir = TempDir::new().unwrap();
    let path = write_words(
        dir.path(),
        "words.txt",
        "English\tFrench\tGerman\nhello\tbonjour\thallo\n",
    );

    let table = TranslationTable::load(&path).unwrap();

    assert_eq!(table.supported_languages(), &["French", "German"]);
    assert_eq!(table.translate("hello", "French"), Ok(Some("bonjour")));
    assert_eq!(
        table.translate("hello", "Spanish"),
        Err(TranslateError::LanguageNotSupported("Spanish".to_string()))
    );
    assert_eq!(
        table.translate("bye", "French"),
        Err(TranslateError::WordNotFound("bye".to_string()))
    );
    assert_eq!(table.source(), Some(path.as_path()));
}

#[test]
fn test_missing_cell_and_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = write_words(
        dir.path(),
        "words.txt",
        "English\tFrench\tGerman\ncat\tchat\ndog\tchien\ndog\ttoutou\n",
    );

    let (table, report) = TableLoader::new().load(&path).unwrap();

    assert_eq!(table.translate("cat", "German"), Ok(None));
    assert_eq!(table.translate("dog", "French"), Ok(Some("toutou")));
    assert_eq!(report.overridden, 1);
    assert_eq!(report.padded_rows, 3);
    assert_eq!(report.entries, 2);
}

#[test]
fn test_round_trip_every_cell() {
    let rows = [
        ("hello", ["bonjour", "hallo", "hola", "ciao"]),
        ("thank you", ["merci", "danke", "gracias", "grazie"]),
        ("water", ["eau", "Wasser", "agua", "acqua"]),
        ("apple", ["pomme", "Apfel", "manzana", "mela"]),
    ];
    let languages = ["French", "German", "Spanish", "Italian"];

    let mut body = format!("English\t{}\n", languages.join("\t"));
    for (word, translations) in &rows {
        body.push_str(&format!("{word}\t{}\n", translations.join("\t")));
    }

    let dir = TempDir::new().unwrap();
    let path = write_words(dir.path(), "words.txt", &body);
    let table = TranslationTable::load(&path).unwrap();

    for (word, translations) in &rows {
        for (language, expected) in languages.iter().zip(translations) {
            assert_eq!(
                table.translate(word, language),
                Ok(Some(*expected)),
                "{word} -> {language}"
            );
        }
    }
}

#[test]
fn test_comma_and_semicolon_files() {
    let dir = TempDir::new().unwrap();
    let csv = write_words(dir.path(), "words.csv", "English,French\nhello,bonjour\n");
    let ssv = write_words(dir.path(), "words.ssv", "English;French\nhello;bonjour\n");

    for path in [csv, ssv] {
        let table = TranslationTable::load(&path).unwrap();
        assert_eq!(table.translate("Hello", "french"), Ok(Some("bonjour")));
    }
}

#[test]
fn test_forced_delimiter_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_words(dir.path(), "words.csv", "English,French\nhello,bonjour\n");

    let loader = TableLoader::with_options(LoadOptions::default().delimiter(Delimiter::Tab));
    assert!(matches!(loader.load(&path), Err(LoadError::MissingSourceColumn)));
}

#[test]
fn test_file_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    match TranslationTable::load(&path) {
        Err(LoadError::FileNotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, b"English\tFrench\nhello\t\xff\xfe\n").unwrap();

    assert!(matches!(TranslationTable::load(&path), Err(LoadError::Io { .. })));
}

#[test]
fn test_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        TranslationTable::load(dir.path()),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn test_header_only_english_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_words(dir.path(), "words.txt", "English\nhello\n");

    assert!(matches!(
        TranslationTable::load(&path),
        Err(LoadError::NoTargetLanguages)
    ));
}

#[test]
fn test_empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_words(dir.path(), "words.txt", "");

    assert!(matches!(
        TranslationTable::load(&path),
        Err(LoadError::MissingHeader)
    ));
}

#[test]
fn test_metadata_reports_source() {
    let dir = TempDir::new().unwrap();
    let path = write_words(dir.path(), "words.txt", "English\tFrench\nhello\tbonjour\n");

    let table = TranslationTable::load(&path).unwrap();
    let metadata = table.metadata();

    assert_eq!(metadata.entry_count, 1);
    assert_eq!(metadata.source, Some(path.display().to_string()));
}

#[test]
fn test_table_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TranslationTable>();
}
