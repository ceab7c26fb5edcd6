use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use email_address::EmailAddress;
use regex::Regex;
use serde::Serialize;

static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid url regex"));

/// Per-field validation messages, keyed by field name.
///
/// Ordered so that error payloads are stable across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn extend(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Folds errors of a nested value under `prefix.` (e.g. `translations.fr.name`).
    pub fn merge_prefixed(&mut self, prefix: &str, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0
                .entry(format!("{prefix}.{field}"))
                .or_default()
                .extend(messages);
        }
    }

    /// Renames every field to `{prefix}{field}`, e.g. `contact-` + `email`.
    pub fn with_prefix(self, prefix: &str) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(field, messages)| (format!("{prefix}{field}"), messages))
                .collect(),
        )
    }

    /// `Ok(value)` when no error was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// ──────────────────────────────────────────────────────────
// Field checks
// ──────────────────────────────────────────────────────────

pub fn required(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "This field is required.");
    }
}

/// Lengths are counted in characters, not bytes.
pub fn max_chars(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.add(
            field,
            format!("Ensure this value has at most {max} characters (it has {len})."),
        );
    }
}

pub fn email(errors: &mut FieldErrors, field: &str, value: &str) {
    if !value.trim().is_empty() && !EmailAddress::is_valid(value.trim()) {
        errors.add(field, "Enter a valid email address.");
    }
}

/// Empty values pass; callers combine with [`required`] when needed.
pub fn http_url(errors: &mut FieldErrors, field: &str, value: &str) {
    if !value.trim().is_empty() && !HTTP_URL.is_match(value.trim()) {
        errors.add(field, "Enter a valid URL.");
    }
}

pub fn one_of(errors: &mut FieldErrors, field: &str, value: &str, allowed: &[&str]) {
    if !value.is_empty() && !allowed.contains(&value) {
        errors.add(
            field,
            format!("Select a valid choice. {value} is not one of the available choices."),
        );
    }
}

/// Trims and turns blank strings into `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
