use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::log::{LogConfig, LogFormat};
use self::table::{DelimiterSetting, TableConfig, parse_language_list};

pub mod log;
pub mod table;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults overridden by `TOLK_*` environment variables (and `.env`)
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(path) = lookup("TOLK_WORDS_PATH").filter(|v| !v.trim().is_empty()) {
            config.table.words_path = PathBuf::from(path);
        }

        config.table.delimiter = lookup("TOLK_DELIMITER")
            .and_then(|v| v.parse::<DelimiterSetting>().ok())
            .unwrap_or_default(); // auto-detect

        config.table.languages = lookup("TOLK_LANGUAGES")
            .map(|v| parse_language_list(&v))
            .unwrap_or_default();

        if let Some(level) = lookup("TOLK_LOG").filter(|v| !v.trim().is_empty()) {
            config.log.level = level;
        }

        config.log.format = lookup("TOLK_LOG_FORMAT")
            .and_then(|v| v.parse::<LogFormat>().ok())
            .unwrap_or_default(); // text

        config
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.table.words_path, PathBuf::from("Translator").join("words.txt"));
        assert_eq!(config.table.delimiter, DelimiterSetting::Auto);
        assert!(config.table.languages.is_empty());
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOLK_WORDS_PATH", "/data/vocab.csv"),
            ("TOLK_DELIMITER", "comma"),
            ("TOLK_LANGUAGES", "French, Italian"),
            ("TOLK_LOG", "tolk=debug"),
            ("TOLK_LOG_FORMAT", "json"),
        ]));

        assert_eq!(config.table.words_path, PathBuf::from("/data/vocab.csv"));
        assert_eq!(config.table.delimiter, DelimiterSetting::Comma);
        assert_eq!(config.table.languages, vec!["French", "Italian"]);
        assert_eq!(config.log.level, "tolk=debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_env_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("TOLK_DELIMITER", "pipe"),
            ("TOLK_LOG_FORMAT", "xml"),
        ]));

        assert_eq!(config.table.delimiter, DelimiterSetting::Auto);
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tolk.json");
        fs::write(
            &path,
            r#"{ "table": { "words_path": "vocab.tsv", "delimiter": "tab" } }"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.table.words_path, PathBuf::from("vocab.tsv"));
        assert_eq!(config.table.delimiter, DelimiterSetting::Tab);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(Config::from_file(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Config::from_file(&broken), Err(ConfigError::Parse { .. })));
    }
}
