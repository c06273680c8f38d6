use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tolk_core::delimiter::{Delimiter, ParseDelimiterError};
use tolk_core::LoadOptions;

fn default_words_path() -> PathBuf {
    PathBuf::from("Translator").join("words.txt")
}

/// Delimiter choice; `Auto` detects it from the header line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterSetting {
    #[default]
    Auto,
    Tab,
    Comma,
    Semicolon,
}

impl DelimiterSetting {
    pub fn delimiter(self) -> Option<Delimiter> {
        match self {
            DelimiterSetting::Auto => None,
            DelimiterSetting::Tab => Some(Delimiter::Tab),
            DelimiterSetting::Comma => Some(Delimiter::Comma),
            DelimiterSetting::Semicolon => Some(Delimiter::Semicolon),
        }
    }
}

impl From<Delimiter> for DelimiterSetting {
    fn from(delimiter: Delimiter) -> Self {
        match delimiter {
            Delimiter::Tab => DelimiterSetting::Tab,
            Delimiter::Comma => DelimiterSetting::Comma,
            Delimiter::Semicolon => DelimiterSetting::Semicolon,
        }
    }
}

impl FromStr for DelimiterSetting {
    type Err = ParseDelimiterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(DelimiterSetting::Auto);
        }
        s.parse::<Delimiter>().map(Into::into)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    #[serde(default = "default_words_path")]
    pub words_path: PathBuf,
    #[serde(default)]
    pub delimiter: DelimiterSetting,
    /// Languages to keep; empty keeps every column in the file
    #[serde(default)]
    pub languages: Vec<String>,
}

impl TableConfig {
    pub fn load_options(&self) -> LoadOptions {
        let mut options = LoadOptions::default().languages(self.languages.iter().cloned());
        options.delimiter = self.delimiter.delimiter();
        options
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            words_path: default_words_path(),
            delimiter: DelimiterSetting::default(),
            languages: vec![],
        }
    }
}

/// Split a comma separated language list, dropping blanks
pub fn parse_language_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
