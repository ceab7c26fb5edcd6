mod language;
mod translations;

pub use language::{LanguageCode, LanguageError, LanguageSettings};
pub use translations::{Localized, Translations};
