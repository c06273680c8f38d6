use std::io::{self, BufRead, Write};

use tolk_core::{LanguageName, TranslateError, Translator};

const EXIT: &str = "exit";
const BACK: &str = "back";

/// Interactive language/word prompt loop
pub struct Menu<'a, T, R, W> {
    translator: &'a T,
    source_name: String,
    input: R,
    output: W,
}

/// Outcome of a word prompt
enum WordStep {
    Back,
    Quit,
}

impl<'a, T, R, W> Menu<'a, T, R, W>
where
    T: Translator,
    R: BufRead,
    W: Write,
{
    pub fn new(translator: &'a T, source_name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            translator,
            source_name: source_name.into(),
            input,
            output,
        }
    }

    /// Run until the user types `exit` or input ends
    pub fn run(mut self) -> io::Result<W> {
        self.banner()?;

        loop {
            let choices = self.language_list();
            let Some(choice) = self.prompt(&format!(
                "In what language do you want to translate (e.g., {choices})? Or type '{EXIT}' to quit: "
            ))?
            else {
                break;
            };

            if choice.eq_ignore_ascii_case(EXIT) {
                break;
            }

            let Some(language) = self.translator.resolve_language(&choice).cloned() else {
                writeln!(self.output, "Invalid language. Please choose from {choices}.")?;
                continue;
            };

            if self.translator.metadata().entry_count == 0 {
                writeln!(
                    self.output,
                    "No English words are available for translation. Please check the file."
                )?;
                continue;
            }

            tracing::debug!("Language selected: {language}");
            if let WordStep::Quit = self.word_loop(&language)? {
                break;
            }
        }

        writeln!(self.output, "Thank you for using the translator.")?;
        self.output.flush()?;
        Ok(self.output)
    }

    fn banner(&mut self) -> io::Result<()> {
        let metadata = self.translator.metadata();
        let languages = self.language_list();

        writeln!(self.output, "Welcome to Translator")?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "This translator's vocabulary is loaded from '{}'.",
            self.source_name
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "Available target languages: {languages}")?;
        writeln!(
            self.output,
            "Successfully loaded {} English words for translation.",
            metadata.entry_count
        )?;
        writeln!(self.output)
    }

    fn word_loop(&mut self, language: &LanguageName) -> io::Result<WordStep> {
        loop {
            let Some(word) = self.prompt(&format!(
                "Please enter the English word you want to translate (or type '{BACK}' to choose a different language): "
            ))?
            else {
                return Ok(WordStep::Quit);
            };

            if word.eq_ignore_ascii_case(BACK) {
                writeln!(self.output, "Returning to language selection.")?;
                return Ok(WordStep::Back);
            }

            if word.is_empty() {
                continue;
            }

            self.translate_word(&word, language)?;
        }
    }

    fn translate_word(&mut self, word: &str, language: &LanguageName) -> io::Result<()> {
        match self.translator.translate(word, language.as_str()) {
            Ok(translation) => match translation.text {
                Some(text) => writeln!(
                    self.output,
                    "'{}' translated to {} is '{}'.",
                    translation.word, translation.to, text
                ),
                None => writeln!(
                    self.output,
                    "'{}' has no {} translation recorded in '{}'.",
                    translation.word, translation.to, self.source_name
                ),
            },
            Err(TranslateError::WordNotFound(word)) => {
                writeln!(
                    self.output,
                    "Sorry, '{word}' is not available for translation in {language}."
                )?;
                writeln!(
                    self.output,
                    "Please check your spelling or choose a word listed in '{}'.",
                    self.source_name
                )
            }
            Err(e @ TranslateError::LanguageNotSupported(_)) => writeln!(self.output, "{e}"),
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn language_list(&self) -> String {
        let languages = self.translator.supported_languages();
        if languages.is_empty() {
            return "no languages available".to_string();
        }
        languages
            .iter()
            .map(LanguageName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
