pub mod delimiter;
pub mod error;
pub mod language;
pub mod loader;
pub mod preprocess;
pub mod table;
pub mod translator;

pub use delimiter::Delimiter;
pub use error::{LoadError, TranslateError};
pub use language::LanguageName;
pub use loader::{LoadOptions, LoadReport, TableLoader};
pub use table::{Entry, TranslationTable};
pub use translator::{ProviderMetadata, Translation, Translator};
