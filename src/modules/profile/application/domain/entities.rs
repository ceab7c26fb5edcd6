use serde::{Deserialize, Serialize};

use crate::shared::i18n::{LanguageCode, Localized, Translations};
use crate::shared::validation::{self, FieldErrors};

pub const NAME_MAX_CHARS: usize = 100;
pub const MEDIA_PATH_MAX_CHARS: usize = 255;

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_BIO: &str = "Welcome to my portfolio.";

/// The single site-owner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub profile_picture: Option<String>,
    pub resume: Option<String>,
    pub translations: Translations<ProfileText>,
}

impl Profile {
    pub fn label(&self) -> &'static str {
        "Profile"
    }

    pub fn localize(&self, requested: &LanguageCode, default: &LanguageCode) -> LocalizedProfile {
        LocalizedProfile {
            profile_picture: self.profile_picture.clone(),
            resume: self.resume.clone(),
            text: self.translations.localize(requested, default),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileText {
    pub name: String,
    #[serde(default)]
    pub bio: String,
}

impl ProfileText {
    pub fn placeholder() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            bio: DEFAULT_BIO.to_string(),
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            bio: self.bio.trim().to_string(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "name", &self.name);
        validation::max_chars(&mut errors, "name", &self.name, NAME_MAX_CHARS);
        errors
    }
}

/// Universal (untranslated) profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

impl ProfileFields {
    pub fn normalized(self) -> Self {
        Self {
            profile_picture: validation::normalize_optional(self.profile_picture),
            resume: validation::normalize_optional(self.resume),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Some(path) = &self.profile_picture {
            validation::max_chars(&mut errors, "profile_picture", path, MEDIA_PATH_MAX_CHARS);
        }
        if let Some(path) = &self.resume {
            validation::max_chars(&mut errors, "resume", path, MEDIA_PATH_MAX_CHARS);
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedProfile {
    pub profile_picture: Option<String>,
    pub resume: Option<String>,
    #[serde(flatten)]
    pub text: Localized<ProfileText>,
}
