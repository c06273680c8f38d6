use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tolk_config::Config;
use tolk_core::{LoadReport, TableLoader, TranslateError, TranslationTable, Translator};

use self::cli::{Cli, Command};
use self::menu::Menu;

pub mod cli;
pub mod logging;
pub mod menu;

#[cfg(test)]
mod tests;

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    LookupFailed,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::LookupFailed => ExitCode::FAILURE,
        }
    }
}

/// `languages --json` payload
#[derive(Serialize)]
struct LanguagesOutput<'a> {
    source: String,
    languages: &'a [tolk_core::LanguageName],
    entry_count: usize,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(&config.log)?;

    let (table, report) = load_table(&config)?;
    if report.skipped_rows > 0 || report.padded_rows > 0 {
        tracing::warn!(
            "{} rows skipped, {} rows with missing translations",
            report.skipped_rows,
            report.padded_rows
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = execute(&cli.command(), &table, cli.json, &mut out)?;
    Ok(status.into())
}

/// Load the vocabulary named by `config`
pub fn load_table(config: &Config) -> anyhow::Result<(TranslationTable, LoadReport)> {
    let path = &config.table.words_path;
    TableLoader::with_options(config.table.load_options())
        .load(path)
        .with_context(|| format!("Failed to load vocabulary from {}", path.display()))
}

/// Run a command against a loaded table
pub fn execute<W: Write>(
    command: &Command,
    table: &TranslationTable,
    json: bool,
    out: &mut W,
) -> anyhow::Result<Status> {
    match command {
        Command::Interactive => {
            let source_name = table
                .source()
                .and_then(|path| path.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "vocabulary".to_string());

            let stdin = io::stdin();
            Menu::new(table, source_name, stdin.lock(), &mut *out)
                .run()
                .context("Interactive session failed")?;
        }
        Command::Languages => {
            if json {
                let payload = LanguagesOutput {
                    source: table.metadata().source.unwrap_or_default(),
                    languages: table.supported_languages(),
                    entry_count: table.len(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            } else {
                for language in table.supported_languages() {
                    writeln!(out, "{language}")?;
                }
            }
        }
        Command::Words => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&table.words())?)?;
            } else {
                for word in table.words() {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Command::Translate { word, to } => {
            return translate_one(table, word, to, json, out);
        }
    }

    Ok(Status::Success)
}

fn translate_one<W: Write>(
    table: &TranslationTable,
    word: &str,
    to: &str,
    json: bool,
    out: &mut W,
) -> anyhow::Result<Status> {
    match Translator::translate(table, word, to) {
        Ok(translation) if json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&translation)?)?;
        }
        Ok(translation) => match &translation.text {
            Some(text) => writeln!(out, "{text}")?,
            None => writeln!(
                out,
                "'{}' has no {} translation recorded",
                translation.word, translation.to
            )?,
        },
        Err(e) => {
            tracing::debug!("Lookup failed: {e}");
            if json {
                let payload = serde_json::json!({ "error": error_kind(&e), "message": e.to_string() });
                writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            } else {
                eprintln!("{e}");
            }
            return Ok(Status::LookupFailed);
        }
    }

    Ok(Status::Success)
}

fn error_kind(error: &TranslateError) -> &'static str {
    match error {
        TranslateError::WordNotFound(_) => "word_not_found",
        TranslateError::LanguageNotSupported(_) => "language_not_supported",
    }
}
