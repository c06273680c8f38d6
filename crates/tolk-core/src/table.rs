use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{LoadError, TranslateError};
use crate::language::LanguageName;
use crate::loader::{LoadOptions, TableLoader};
use crate::preprocess::{KeyPreprocessor, Preprocessor};

/// One English word and its translation per detected language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    translations: HashMap<LanguageName, String>,
}

impl Entry {
    pub(crate) fn new(word: String, translations: HashMap<LanguageName, String>) -> Self {
        Self { word, translations }
    }

    /// English word as written in the file
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Translation for `language`, `None` when the cell was empty
    pub fn translation(&self, language: &LanguageName) -> Option<&str> {
        self.translations
            .get(language)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Number of language slots, equal to the table's language count
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

/// Immutable word table built once from a vocabulary file.
///
/// Every [`Entry`] carries a slot for each language in
/// [`supported_languages`](Self::supported_languages); empty cells stay
/// empty instead of failing the load.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    source: Option<PathBuf>,
    languages: Vec<LanguageName>,
    language_index: HashMap<String, usize>,
    entries: HashMap<String, Entry>,
}

impl TranslationTable {
    pub(crate) fn new(
        source: Option<PathBuf>,
        languages: Vec<LanguageName>,
        entries: HashMap<String, Entry>,
    ) -> Self {
        let language_index = languages
            .iter()
            .enumerate()
            .map(|(idx, name)| (KeyPreprocessor.process(name.as_str()), idx))
            .collect();

        Self {
            source,
            languages,
            language_index,
            entries,
        }
    }

    /// Load a table from a vocabulary file, auto-detecting the delimiter
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        TableLoader::new().load(path).map(|(table, _)| table)
    }

    /// Parse a table from in-memory text
    pub fn from_str_with(text: &str, options: &LoadOptions) -> Result<Self, LoadError> {
        TableLoader::with_options(options.clone())
            .parse(text, None)
            .map(|(table, _)| table)
    }

    /// Look up `word` in `language`.
    ///
    /// Both are matched case-insensitively after trimming. `Ok(None)` means
    /// the word is known but has no translation recorded for `language`.
    pub fn translate(&self, word: &str, language: &str) -> Result<Option<&str>, TranslateError> {
        let language_name = self
            .language(language)
            .ok_or_else(|| TranslateError::LanguageNotSupported(language.trim().to_string()))?;

        let entry = self
            .entry(word)
            .ok_or_else(|| TranslateError::WordNotFound(word.trim().to_string()))?;

        Ok(entry.translation(language_name))
    }

    /// Detected target languages in header order
    pub fn supported_languages(&self) -> &[LanguageName] {
        &self.languages
    }

    /// Resolve a user-supplied language name to its header spelling
    pub fn language(&self, name: &str) -> Option<&LanguageName> {
        self.language_index
            .get(&KeyPreprocessor.process(name))
            .and_then(|&idx| self.languages.get(idx))
    }

    pub fn entry(&self, word: &str) -> Option<&Entry> {
        self.entries.get(&KeyPreprocessor.process(word))
    }

    /// Every translation of `word` in header order
    pub fn translations(&self, word: &str) -> Option<Vec<(&LanguageName, Option<&str>)>> {
        let entry = self.entry(word)?;
        Some(
            self.languages
                .iter()
                .map(|language| (language, entry.translation(language)))
                .collect(),
        )
    }

    /// English words sorted alphabetically
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.values().map(Entry::word).collect();
        words.sort_unstable_by_key(|word| word.to_lowercase());
        words
    }

    /// File the table was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for TranslationTable {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_str_with(text, &LoadOptions::default())
    }
}
