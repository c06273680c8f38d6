use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Field separator used consistently across a vocabulary file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Tab,
    Semicolon,
    Comma,
}

impl Delimiter {
    /// Candidates in tie-break order
    const PREFERENCE: [Delimiter; 3] = [Delimiter::Tab, Delimiter::Semicolon, Delimiter::Comma];

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Comma => "comma",
        }
    }

    /// Pick the delimiter that occurs most often in the header line.
    ///
    /// Ties go to tab, then semicolon, then comma. A header containing none
    /// of them is a single column and reports `Tab`.
    pub fn detect(header: &str) -> Self {
        let mut best = Delimiter::Tab;
        let mut best_count = 0;

        for candidate in Self::PREFERENCE {
            let count = header.matches(candidate.as_char()).count();
            if count > best_count {
                best = candidate;
                best_count = count;
            }
        }

        best
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown delimiter '{0}', expected tab, comma or semicolon")]
pub struct ParseDelimiterError(pub String);

impl FromStr for Delimiter {
    type Err = ParseDelimiterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Raw characters are matched before trimming, a tab would trim away
        match s {
            "\t" => return Ok(Delimiter::Tab),
            ";" => return Ok(Delimiter::Semicolon),
            "," => return Ok(Delimiter::Comma),
            _ => {}
        }

        match s.trim().to_lowercase().as_str() {
            "tab" | "\\t" | "tsv" => Ok(Delimiter::Tab),
            "semicolon" => Ok(Delimiter::Semicolon),
            "comma" | "csv" => Ok(Delimiter::Comma),
            _ => Err(ParseDelimiterError(s.to_string())),
        }
    }
}
