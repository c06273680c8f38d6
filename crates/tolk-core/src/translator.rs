use serde::Serialize;

use crate::error::TranslateError;
use crate::language::LanguageName;
use crate::table::TranslationTable;

/// Translation provider interface
pub trait Translator {
    /// Translate an English word into `to`
    fn translate(&self, word: &str, to: &str) -> Result<Translation, TranslateError>;

    /// Resolve a language name to the provider's spelling, if supported
    fn resolve_language(&self, name: &str) -> Option<&LanguageName>;

    /// Get supported target languages
    fn supported_languages(&self) -> &[LanguageName];

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub word: String,
    pub to: LanguageName,
    /// `None` when the word is known but has no translation for `to`
    pub text: Option<String>,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub name: String,
    pub source: Option<String>,
    pub entry_count: usize,
}

impl Translator for TranslationTable {
    fn translate(&self, word: &str, to: &str) -> Result<Translation, TranslateError> {
        let text = TranslationTable::translate(self, word, to)?;
        let to = self
            .language(to)
            .cloned()
            .ok_or_else(|| TranslateError::LanguageNotSupported(to.trim().to_string()))?;
        let word = self.entry(word).map(|e| e.word()).unwrap_or(word.trim());

        Ok(Translation {
            word: word.to_string(),
            to,
            text: text.map(str::to_string),
            provider: "word-table".to_string(),
        })
    }

    fn resolve_language(&self, name: &str) -> Option<&LanguageName> {
        self.language(name)
    }

    fn supported_languages(&self) -> &[LanguageName] {
        TranslationTable::supported_languages(self)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "word-table".to_string(),
            source: self.source().map(|path| path.display().to_string()),
            entry_count: self.len(),
        }
    }
}
