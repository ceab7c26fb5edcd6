use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::i18n::{LanguageCode, Localized, Translations};
use crate::shared::validation::FieldErrors;

/// A multilingual content type: universal fields in `Self`, translated
/// fields in `Self::Text`, one row per language.
pub trait ContentKind:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Text: Clone
        + fmt::Debug
        + Default
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// Plural path segment, e.g. `skills`.
    const KIND: &'static str;

    /// Shown when no translation yields a label.
    const NAME: &'static str;

    fn normalized(self) -> Self {
        self
    }

    fn validate(&self) -> FieldErrors;

    fn normalize_text(text: Self::Text) -> Self::Text;

    fn validate_text(text: &Self::Text) -> FieldErrors;

    /// `needle` is already lowercased.
    fn text_matches(text: &Self::Text, needle: &str) -> bool;

    /// Display label built from the per-field fallback getter.
    fn label(
        translations: &Translations<Self::Text>,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Option<String>;
}

/// A stored content entry with all of its translations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct ContentRecord<K: ContentKind> {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: K,
    pub translations: Translations<K::Text>,
}

impl<K: ContentKind> ContentRecord<K> {
    pub fn label(&self, requested: &LanguageCode, default: &LanguageCode) -> String {
        K::label(&self.translations, requested, default).unwrap_or_else(|| K::NAME.to_string())
    }

    /// Case-insensitive match against every translation.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.translations
            .iter()
            .any(|(_, text)| K::text_matches(text, &needle))
    }

    pub fn localize(&self, requested: &LanguageCode, default: &LanguageCode) -> LocalizedContent<K> {
        LocalizedContent {
            id: self.id,
            data: self.data.clone(),
            label: self.label(requested, default),
            text: self.translations.localize(requested, default),
        }
    }
}

/// One entry resolved for display in a single language.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct LocalizedContent<K: ContentKind> {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: K,
    pub label: String,
    #[serde(flatten)]
    pub text: Localized<K::Text>,
}

/// Lowercased substring test used by [`ContentKind::text_matches`].
pub(crate) fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
