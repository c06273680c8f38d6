use std::path::PathBuf;

/// Failures while building a [`TranslationTable`](crate::table::TranslationTable).
///
/// All of these are fatal to startup: no table is produced.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing header row")]
    MissingHeader,

    #[error("Header has no 'English' column")]
    MissingSourceColumn,

    #[error("Header has no target language columns")]
    NoTargetLanguages,

    #[error("Empty language name in header column {column}")]
    EmptyLanguageName { column: usize },

    #[error("Duplicate column in header: {0}")]
    DuplicateLanguage(String),

    #[error("Requested language not in header: {0}")]
    MissingLanguage(String),
}

/// Per-query lookup failures. The table stays valid after either of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("Word not found: {0}")]
    WordNotFound(String),

    #[error("Language not supported: {0}")]
    LanguageNotSupported(String),
}
