use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::delimiter::Delimiter;
use crate::error::LoadError;
use crate::language::LanguageName;
use crate::preprocess::{KeyPreprocessor, Preprocessor};
use crate::table::{Entry, TranslationTable};

const SOURCE_COLUMN: &str = "english";

/// Options controlling how a vocabulary file is parsed
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// `None` detects the delimiter from the header line
    pub delimiter: Option<Delimiter>,
    /// Restrict the table to these languages; empty keeps every column
    pub languages: Vec<String>,
}

impl LoadOptions {
    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }
}

/// Counters gathered while parsing data rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Non-blank data rows seen
    pub rows: usize,
    /// Distinct English words in the table
    pub entries: usize,
    /// Rows dropped for a missing English cell
    pub skipped_rows: usize,
    /// Rows shorter than the header
    pub padded_rows: usize,
    /// Rows that replaced an earlier row with the same English word
    pub overridden: usize,
}

/// Resolved header layout
struct Header {
    delimiter: Delimiter,
    width: usize,
    source: usize,
    /// (column index, language) for every kept target column
    columns: Vec<(usize, LanguageName)>,
}

pub struct TableLoader {
    options: LoadOptions,
}

impl TableLoader {
    pub fn new() -> Self {
        Self::with_options(LoadOptions::default())
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Load a table from file path
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(TranslationTable, LoadReport), LoadError> {
        let path = path.as_ref();
        tracing::info!("Loading vocabulary from file: {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let (table, report) = self.parse(&text, Some(path.to_path_buf()))?;
        tracing::info!(
            "Loaded {} English words in {} languages from file",
            report.entries,
            table.supported_languages().len()
        );
        Ok((table, report))
    }

    /// Parse vocabulary text. Nothing is returned unless the whole input parses.
    pub fn parse(
        &self,
        text: &str,
        source: Option<PathBuf>,
    ) -> Result<(TranslationTable, LoadReport), LoadError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text.lines().enumerate();

        let header_line = lines.next().map(|(_, line)| line).unwrap_or_default();
        let header = self.parse_header(header_line)?;
        tracing::debug!(
            "Header uses {} delimiter, languages: {:?}",
            header.delimiter,
            header.columns.iter().map(|(_, name)| name.as_str()).collect::<Vec<_>>()
        );

        let mut report = LoadReport::default();
        let mut entries: HashMap<String, Entry> = HashMap::new();

        for (idx, line) in lines {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            report.rows += 1;

            let cells: Vec<&str> = line.split(header.delimiter.as_char()).map(str::trim).collect();

            let word = match cells.get(header.source) {
                Some(word) if !word.is_empty() => *word,
                _ => {
                    tracing::warn!("Skipping row {line_no} with no English word: '{line}'");
                    report.skipped_rows += 1;
                    continue;
                }
            };

            if cells.len() < header.width {
                tracing::warn!(
                    "Row {line_no} has {} of {} columns, missing translations left empty",
                    cells.len(),
                    header.width
                );
                report.padded_rows += 1;
            } else if cells[header.width..].iter().any(|cell| !cell.is_empty()) {
                tracing::warn!("Row {line_no} has extra columns beyond the header, ignoring them");
            }

            let translations = header
                .columns
                .iter()
                .map(|(col, name)| {
                    let text = cells.get(*col).copied().unwrap_or_default();
                    (name.clone(), text.to_string())
                })
                .collect();

            let key = KeyPreprocessor.process(word);
            if entries
                .insert(key, Entry::new(word.to_string(), translations))
                .is_some()
            {
                tracing::debug!("Row {line_no} overrides earlier entry for '{word}'");
                report.overridden += 1;
            }
        }

        report.entries = entries.len();
        let languages = header.columns.into_iter().map(|(_, name)| name).collect();

        Ok((TranslationTable::new(source, languages, entries), report))
    }

    fn parse_header(&self, line: &str) -> Result<Header, LoadError> {
        if line.trim().is_empty() {
            return Err(LoadError::MissingHeader);
        }

        let delimiter = self.options.delimiter.unwrap_or_else(|| Delimiter::detect(line));

        let mut cells: Vec<&str> = line.split(delimiter.as_char()).map(str::trim).collect();
        // Trailing delimiters are tolerated
        while cells.last().is_some_and(|cell| cell.is_empty()) {
            cells.pop();
        }

        let mut source = None;
        let mut seen = HashSet::new();
        let mut columns = Vec::new();

        for (col, cell) in cells.iter().enumerate() {
            let key = KeyPreprocessor.process(cell);

            if key == SOURCE_COLUMN {
                if source.replace(col).is_some() {
                    return Err(LoadError::DuplicateLanguage(cell.to_string()));
                }
                continue;
            }

            if key.is_empty() {
                return Err(LoadError::EmptyLanguageName { column: col + 1 });
            }

            if !seen.insert(key.clone()) {
                return Err(LoadError::DuplicateLanguage(cell.to_string()));
            }

            columns.push((col, key, LanguageName::new(*cell)));
        }

        let source = source.ok_or(LoadError::MissingSourceColumn)?;

        if !self.options.languages.is_empty() {
            let requested: HashSet<String> = self
                .options
                .languages
                .iter()
                .map(|name| KeyPreprocessor.process(name))
                .collect();

            for name in &self.options.languages {
                if !seen.contains(&KeyPreprocessor.process(name)) {
                    return Err(LoadError::MissingLanguage(name.trim().to_string()));
                }
            }

            columns.retain(|(_, key, _)| requested.contains(key));
        }

        if columns.is_empty() {
            return Err(LoadError::NoTargetLanguages);
        }

        Ok(Header {
            delimiter,
            width: cells.len(),
            source,
            columns: columns
                .into_iter()
                .map(|(col, _, name)| (col, name))
                .collect(),
        })
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}
