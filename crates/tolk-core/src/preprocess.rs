use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default lookup-key preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Canonical (NFC) only: compatibility forms such as "ﬁ" or "²" stay distinct
        let text: String = text.nfc().collect();

        text.replace(['\n', '\r'], "").trim().to_lowercase()
    }
}

/// Normalizes English words and language names into lookup keys
pub struct KeyPreprocessor;
impl Preprocessor for KeyPreprocessor {}
