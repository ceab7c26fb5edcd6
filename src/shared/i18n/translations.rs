use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::language::{LanguageCode, LanguageSettings};
use crate::shared::validation::FieldErrors;

/// Translated fields of one entity, keyed by language.
///
/// Keys are kept ordered so the "first available language" step of the
/// fallback is deterministic (ascending language code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Translations<T>(BTreeMap<LanguageCode, T>);

impl<T> Default for Translations<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T> Translations<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: LanguageCode, value: T) -> Option<T> {
        self.0.insert(language, value)
    }

    pub fn remove(&mut self, language: &LanguageCode) -> Option<T> {
        self.0.remove(language)
    }

    pub fn get(&self, language: &LanguageCode) -> Option<&T> {
        self.0.get(language)
    }

    pub fn contains(&self, language: &LanguageCode) -> bool {
        self.0.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &T)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Best available translation: `requested`, then `default`, then the
    /// first stored language. `None` only when there are no translations.
    pub fn resolve(
        &self,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Option<(&LanguageCode, &T)> {
        self.0
            .get_key_value(requested)
            .or_else(|| self.0.get_key_value(default))
            .or_else(|| self.0.iter().next())
    }

    /// Same order as [`resolve`](Self::resolve), but languages whose value
    /// for this field is blank are skipped.
    pub fn field<'a, F>(
        &'a self,
        requested: &LanguageCode,
        default: &LanguageCode,
        getter: F,
    ) -> Option<&'a str>
    where
        F: Fn(&'a T) -> &'a str,
    {
        let non_empty = |value: &'a T| Some(getter(value)).filter(|s| !s.trim().is_empty());

        self.0
            .get(requested)
            .and_then(&non_empty)
            .or_else(|| self.0.get(default).and_then(&non_empty))
            .or_else(|| self.0.values().find_map(&non_empty))
    }
}

impl<T: Clone + Default> Translations<T> {
    pub fn localize(&self, requested: &LanguageCode, default: &LanguageCode) -> Localized<T> {
        match self.resolve(requested, default) {
            Some((language, text)) => Localized {
                language: Some(language.clone()),
                text: text.clone(),
            },
            None => Localized {
                language: None,
                text: T::default(),
            },
        }
    }
}

impl<T> Translations<T> {
    /// Checks every stored translation: the language must be supported and
    /// `check` must accept the text. Errors land under `translations.{lang}`.
    pub fn validate<F>(&self, languages: &LanguageSettings, check: F) -> FieldErrors
    where
        F: Fn(&T) -> FieldErrors,
    {
        let mut errors = FieldErrors::new();
        for (language, text) in &self.0 {
            let prefix = format!("translations.{}", language);
            if !languages.is_supported(language) {
                errors.add(&prefix, format!("Language {} is not supported.", language));
                continue;
            }
            errors.merge_prefixed(&prefix, check(text));
        }
        errors
    }
}

impl<T> FromIterator<(LanguageCode, T)> for Translations<T> {
    fn from_iter<I: IntoIterator<Item = (LanguageCode, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Translations<T> {
    type Item = (LanguageCode, T);
    type IntoIter = std::collections::btree_map::IntoIter<LanguageCode, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Translated text picked for display, with the language it actually came
/// from (`null` when the entity has no translation at all).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct Localized<T> {
    pub language: Option<LanguageCode>,
    #[serde(flatten)]
    pub text: T,
}
