// src/shared/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::shared::i18n::{LanguageCode, LanguageSettings};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
pub fn load_dotenv() {
    let env = rust_env();
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

pub fn rust_env() -> String {
    env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

/// Unset and blank variables are both treated as absent.
pub(crate) fn optional(key: &'static str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────

/// Upper bounds on visitor-submitted free text, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionLimits {
    pub contact_message_max_length: usize,
    pub testimonial_quote_max_length: usize,
}

impl Default for SubmissionLimits {
    fn default() -> Self {
        Self {
            contact_message_max_length: 5000,
            testimonial_quote_max_length: 1000,
        }
    }
}

impl SubmissionLimits {
    /// Percent-encoding turns one character into at most 12 bytes (4 UTF-8
    /// bytes, `%XX` each); the rest covers the other short fields.
    pub fn form_body_limit(&self) -> usize {
        self.contact_message_max_length
            .max(self.testimonial_quote_max_length)
            * 12
            + 4096
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSettings {
    pub root: PathBuf,
    pub max_upload_bytes: usize,
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("media"),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminBootstrap {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpSettings {
    /// Mailpit/MailHog style relay without TLS or credentials.
    Local { host: String, port: u16 },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub notify_email: String,
    pub from_email: String,
    pub smtp: SmtpSettings,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub languages: LanguageSettings,
    pub limits: SubmissionLimits,
    pub media: MediaSettings,
    pub run_migrations: bool,
    pub admin: Option<AdminBootstrap>,
    pub notifications: Option<NotificationSettings>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let host = optional("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", 8080u16)?;

        Ok(Self {
            database_url,
            host,
            port,
            languages: Self::languages_from_env()?,
            limits: Self::limits_from_env()?,
            media: Self::media_from_env()?,
            run_migrations: parse_or("RUN_MIGRATIONS", true)?,
            admin: Self::admin_from_env(),
            notifications: Self::notifications_from_env()?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn languages_from_env() -> Result<LanguageSettings, ConfigError> {
        let raw = optional("LANGUAGES").unwrap_or_else(|| "en,fr".to_string());
        let supported = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(LanguageCode::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::Invalid {
                key: "LANGUAGES",
                reason: e.to_string(),
            })?;

        let default_raw = optional("DEFAULT_LANGUAGE").unwrap_or_else(|| "en".to_string());
        let default = LanguageCode::parse(&default_raw).map_err(|e| ConfigError::Invalid {
            key: "DEFAULT_LANGUAGE",
            reason: e.to_string(),
        })?;

        LanguageSettings::new(default, supported).map_err(|e| ConfigError::Invalid {
            key: "DEFAULT_LANGUAGE",
            reason: e.to_string(),
        })
    }

    fn limits_from_env() -> Result<SubmissionLimits, ConfigError> {
        let defaults = SubmissionLimits::default();
        let limits = SubmissionLimits {
            contact_message_max_length: parse_or(
                "CONTACT_MESSAGE_MAX_LENGTH",
                defaults.contact_message_max_length,
            )?,
            testimonial_quote_max_length: parse_or(
                "TESTIMONIAL_QUOTE_MAX_LENGTH",
                defaults.testimonial_quote_max_length,
            )?,
        };

        if limits.contact_message_max_length == 0 {
            return Err(ConfigError::Invalid {
                key: "CONTACT_MESSAGE_MAX_LENGTH",
                reason: "must be greater than zero".to_string(),
            });
        }
        if limits.testimonial_quote_max_length == 0 {
            return Err(ConfigError::Invalid {
                key: "TESTIMONIAL_QUOTE_MAX_LENGTH",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(limits)
    }

    fn media_from_env() -> Result<MediaSettings, ConfigError> {
        let defaults = MediaSettings::default();
        Ok(MediaSettings {
            root: optional("MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.root),
            max_upload_bytes: parse_or("MEDIA_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }

    fn admin_from_env() -> Option<AdminBootstrap> {
        let username = optional("ADMIN_USERNAME")?;
        let password = optional("ADMIN_PASSWORD")?;
        let email = optional("ADMIN_EMAIL").unwrap_or_default();

        Some(AdminBootstrap {
            username,
            email,
            password,
        })
    }

    /// Notifications are disabled unless `NOTIFY_EMAIL` is set.
    fn notifications_from_env() -> Result<Option<NotificationSettings>, ConfigError> {
        let Some(notify_email) = optional("NOTIFY_EMAIL") else {
            return Ok(None);
        };
        let from_email = required("EMAIL_FROM")?;

        let smtp = if rust_env() == "test" {
            SmtpSettings::Local {
                host: optional("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", 1025u16)?,
            }
        } else {
            SmtpSettings::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        Ok(Some(NotificationSettings {
            notify_email,
            from_email,
            smtp,
        }))
    }
}
