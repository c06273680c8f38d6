use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tolk_config::Config;
use tolk_config::table::DelimiterSetting;

#[derive(Parser, Debug)]
#[command(name = "tolk")]
#[command(version)]
#[command(about = "Look up English words in a delimited translation table")]
#[command(long_about = None)]
pub struct Cli {
    /// Vocabulary file (header row: English plus one column per language)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Column delimiter
    #[arg(short, long, global = true, value_enum)]
    pub delimiter: Option<DelimiterArg>,

    /// Only load these languages
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// JSON config file (defaults come from TOLK_* environment variables)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Machine-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (default)
    Interactive,

    /// List the target languages found in the file
    Languages,

    /// List the English words found in the file
    Words,

    /// Translate a single word
    Translate {
        /// English word
        #[arg(value_name = "WORD")]
        word: String,

        /// Target language
        #[arg(short, long)]
        to: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DelimiterArg {
    Auto,
    Tab,
    Comma,
    Semicolon,
}

impl From<DelimiterArg> for DelimiterSetting {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Auto => DelimiterSetting::Auto,
            DelimiterArg::Tab => DelimiterSetting::Tab,
            DelimiterArg::Comma => DelimiterSetting::Comma,
            DelimiterArg::Semicolon => DelimiterSetting::Semicolon,
        }
    }
}

impl Cli {
    /// Config file (or environment), then command-line overrides
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::new(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(file) = &self.file {
            config.table.words_path = file.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.table.delimiter = delimiter.into();
        }
        if let Some(languages) = &self.languages {
            config.table.languages = languages
                .iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect();
        }
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}
