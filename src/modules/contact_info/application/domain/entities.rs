use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, FieldErrors};

pub const DEFAULT_EMAIL: &str = "contact@example.com";
pub const EMAIL_MAX_CHARS: usize = 254;
pub const PHONE_MAX_CHARS: usize = 20;

/// Site-wide contact details; exactly one row exists. Empty strings mean
/// "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub twitter_url: String,
}

impl ContactInfo {
    pub fn with_default_email() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            ..Self::default()
        }
    }

    pub fn label(&self) -> &'static str {
        "Contact Details"
    }

    pub fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            github_url: self.github_url.trim().to_string(),
            linkedin_url: self.linkedin_url.trim().to_string(),
            twitter_url: self.twitter_url.trim().to_string(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "email", &self.email);
        validation::max_chars(&mut errors, "email", &self.email, EMAIL_MAX_CHARS);
        validation::email(&mut errors, "email", &self.email);
        validation::max_chars(&mut errors, "phone", &self.phone, PHONE_MAX_CHARS);
        validation::http_url(&mut errors, "github_url", &self.github_url);
        validation::http_url(&mut errors, "linkedin_url", &self.linkedin_url);
        validation::http_url(&mut errors, "twitter_url", &self.twitter_url);
        errors
    }
}
