use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,8})*$").expect("valid language regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("invalid language code: {0:?}")]
    InvalidCode(String),

    #[error("at least one supported language is required")]
    NoLanguages,

    #[error("default language {0} is not among the supported languages")]
    DefaultNotSupported(LanguageCode),
}

/// Lowercase BCP-47-like tag such as `en`, `fr` or `pt-br`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Accepts mixed case and `_` separators (`pt_BR`), normalising to `pt-br`.
    pub fn parse(raw: &str) -> Result<Self, LanguageError> {
        let normalized = raw.trim().to_lowercase().replace('_', "-");
        if normalized.len() > 15 || !LANGUAGE_TAG.is_match(&normalized) {
            return Err(LanguageError::InvalidCode(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LanguageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

/// Languages the site is published in, plus the one used as fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSettings {
    default: LanguageCode,
    supported: Vec<LanguageCode>,
}

impl LanguageSettings {
    pub fn new(default: LanguageCode, supported: Vec<LanguageCode>) -> Result<Self, LanguageError> {
        let mut deduped: Vec<LanguageCode> = Vec::with_capacity(supported.len());
        for code in supported {
            if !deduped.contains(&code) {
                deduped.push(code);
            }
        }

        if deduped.is_empty() {
            return Err(LanguageError::NoLanguages);
        }
        if !deduped.contains(&default) {
            return Err(LanguageError::DefaultNotSupported(default));
        }

        Ok(Self {
            default,
            supported: deduped,
        })
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default
    }

    /// In configuration order.
    pub fn supported(&self) -> &[LanguageCode] {
        &self.supported
    }

    pub fn is_supported(&self, code: &LanguageCode) -> bool {
        self.supported.contains(code)
    }

    /// Parses a raw path segment and keeps it only if it is a supported language.
    pub fn resolve(&self, raw: &str) -> Option<LanguageCode> {
        LanguageCode::parse(raw)
            .ok()
            .filter(|code| self.is_supported(code))
    }
}

impl Default for LanguageSettings {
    fn default() -> Self {
        let en = LanguageCode("en".to_string());
        let fr = LanguageCode("fr".to_string());
        Self {
            default: en.clone(),
            supported: vec![en, fr],
        }
    }
}
