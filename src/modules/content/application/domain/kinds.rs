use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entities::{contains, ContentKind};
use super::icons::{EXPERIENCE_ICONS, HOBBY_ICONS};
use crate::shared::i18n::{LanguageCode, Translations};
use crate::shared::validation::{self, normalize_optional, FieldErrors};

pub const SHORT_TEXT_MAX_CHARS: usize = 100;
pub const LONG_TITLE_MAX_CHARS: usize = 200;
pub const MEDIA_PATH_MAX_CHARS: usize = 255;

fn check_date_range(errors: &mut FieldErrors, start: NaiveDate, end: Option<NaiveDate>) {
    if let Some(end) = end {
        if end < start {
            errors.add("end_date", "End date must not be before the start date.");
        }
    }
}

fn check_media_path(errors: &mut FieldErrors, field: &str, path: &Option<String>) {
    if let Some(path) = path {
        validation::max_chars(errors, field, path, MEDIA_PATH_MAX_CHARS);
    }
}

/// "A at B", or whichever half exists.
fn joined(first: Option<&str>, second: Option<&str>) -> Option<String> {
    match (first, second) {
        (Some(a), Some(b)) => Some(format!("{} at {}", a, b)),
        (Some(a), None) => Some(a.to_string()),
        (None, Some(b)) => Some(b.to_string()),
        (None, None) => None,
    }
}

// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// 1 to 100.
    pub proficiency: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillText {
    pub name: String,
}

impl ContentKind for Skill {
    type Text = SkillText;
    const KIND: &'static str = "skills";
    const NAME: &'static str = "Skill";

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !(1..=100).contains(&self.proficiency) {
            errors.add("proficiency", "Proficiency must be between 1 and 100.");
        }
        errors
    }

    fn normalize_text(text: SkillText) -> SkillText {
        SkillText {
            name: text.name.trim().to_string(),
        }
    }

    fn validate_text(text: &SkillText) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "name", &text.name);
        validation::max_chars(&mut errors, "name", &text.name, SHORT_TEXT_MAX_CHARS);
        errors
    }

    fn text_matches(text: &SkillText, needle: &str) -> bool {
        contains(&text.name, needle)
    }

    fn label(
        translations: &Translations<SkillText>,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Option<String> {
        translations
            .field(requested, default, |t| t.name.as_str())
            .map(str::to_string)
    }
}

// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub code_link: Option<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectText {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ContentKind for Project {
    type Text = ProjectText;
    const KIND: &'static str = "projects";
    const NAME: &'static str = "Project";

    fn normalized(self) -> Self {
        Self {
            image: normalize_optional(self.image),
            code_link: normalize_optional(self.code_link),
            demo_link: normalize_optional(self.demo_link),
            created_date: self.created_date,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_media_path(&mut errors, "image", &self.image);
        if let Some(link) = &self.code_link {
            validation::http_url(&mut errors, "code_link", link);
        }
        if let Some(link) = &self.demo_link {
            validation::http_url(&mut errors, "demo_link", link);
        }
        errors
    }

    fn normalize_text(text: ProjectText) -> ProjectText {
        ProjectText {
            title: text.title.trim().to_string(),
            description: text.description.trim().to_string(),
        }
    }

    fn validate_text(text: &ProjectText) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "title", &text.title);
        validation::max_chars(&mut errors, "title", &text.title, LONG_TITLE_MAX_CHARS);
        errors
    }

    fn text_matches(text: &ProjectText, needle: &str) -> bool {
        contains(&text.title, needle) || contains(&text.description, needle)
    }

    fn label(
        translations: &Translations<ProjectText>,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Option<String> {
        translations
            .field(requested, default, |t| t.title.as_str())
            .map(str::to_string)
    }
}

// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub start_date: NaiveDate,
    /// `None` means the position is current.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// One of [`EXPERIENCE_ICONS`] or empty.
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceText {
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
}

impl ContentKind for Experience {
    type Text = ExperienceText;
    const KIND: &'static str = "experiences";
    const NAME: &'static str = "Experience";

    fn normalized(self) -> Self {
        Self {
            icon: self.icon.trim().to_string(),
            ..self
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_date_range(&mut errors, self.start_date, self.end_date);
        validation::one_of(&mut errors, "icon", &self.icon, EXPERIENCE_ICONS);
        errors
    }

    fn normalize_text(text: ExperienceText) -> ExperienceText {
        ExperienceText {
            job_title: text.job_title.trim().to_string(),
            company: text.company.trim().to_string(),
            description: text.description.trim().to_string(),
        }
    }

    fn validate_text(text: &ExperienceText) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "job_title", &text.job_title);
        validation::max_chars(&mut errors, "job_title", &text.job_title, LONG_TITLE_MAX_CHARS);
        validation::required(&mut errors, "company", &text.company);
        validation::max_chars(&mut errors, "company", &text.company, LONG_TITLE_MAX_CHARS);
        errors
    }

    fn text_matches(text: &ExperienceText, needle: &str) -> bool {
        contains(&text.job_title, needle)
            || contains(&text.company, needle)
            || contains(&text.description, needle)
    }

    fn label(
        translations: &Translations<ExperienceText>,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Option<String> {
        joined(
            translations.field(requested, default, |t| t.job_title.as_str()),
            translations.field(requested, default, |t| t.company.as_str()),
        )
    }
}

// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationText {
    pub degree: String,
    pub institution: String,
}

impl ContentKind for Education {
    type Text = EducationText;
    const KIND: &'static str = "educations";
    const NAME: &'static str = "Education";

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_date_range(&mut errors, self.start_date, self.end_date);
        errors
    }

    fn normalize_text(text: EducationText) -> EducationText {
        EducationText {
            degree: text.degree.trim().to_string(),
            institution: text.institution.trim().to_string(),
        }
    }

    fn validate_text(text: &EducationText) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "degree", &text.degree);
        validation::max_chars(&mut errors, "degree", &text.degree, LONG_TITLE_MAX_CHARS);
        validation::required(&mut errors, "institution", &text.institution);
        validation::max_chars(
            &mut errors,
            "institution",
            &text.institution,
            LONG_TITLE_MAX_CHARS,
        );
        errors
    }

    fn text_matches(text: &EducationText, needle: &str) -> bool {
        contains(&text.degree, needle) || contains(&text.institution, needle)
    }

    fn label(
        translations: &Translations<EducationText>,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Option<String> {
        joined(
            translations.field(requested, default, |t| t.degree.as_str()),
            translations.field(requested, default, |t| t.institution.as_str()),
        )
    }
}

// ──────────────────────────────────────────────────────────
// Hobby
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hobby {
    /// Custom image (media path).
    #[serde(default)]
    pub icon: Option<String>,
    /// One of [`HOBBY_ICONS`] or empty.
    #[serde(default)]
    pub font_awesome_icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HobbyText {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// What a hobby card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum HobbyIcon {
    BuiltIn(String),
    Image(String),
}

impl Hobby {
    /// The built-in icon wins over the custom image.
    pub fn display_icon(&self) -> Option<HobbyIcon> {
        if !self.font_awesome_icon.is_empty() {
            return Some(HobbyIcon::BuiltIn(self.font_awesome_icon.clone()));
        }
        self.icon.clone().map(HobbyIcon::Image)
    }
}

impl ContentKind for Hobby {
    type Text = HobbyText;
    const KIND: &'static str = "hobbies";
    const NAME: &'static str = "Hobby";

    fn normalized(self) -> Self {
        Self {
            icon: normalize_optional(self.icon),
            font_awesome_icon: self.font_awesome_icon.trim().to_string(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_media_path(&mut errors, "icon", &self.icon);
        validation::one_of(
            &mut errors,
            "font_awesome_icon",
            &self.font_awesome_icon,
            HOBBY_ICONS,
        );
        errors
    }

    fn normalize_text(text: HobbyText) -> HobbyText {
        HobbyText {
            name: text.name.trim().to_string(),
            description: text.description.trim().to_string(),
        }
    }

    fn validate_text(text: &HobbyText) -> FieldErrors {
        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "name", &text.name);
        validation::max_chars(&mut errors, "name", &text.name, SHORT_TEXT_MAX_CHARS);
        errors
    }

    fn text_matches(text: &HobbyText, needle: &str) -> bool {
        contains(&text.name, needle) || contains(&text.description, needle)
    }

    fn label(
        translations: &Translations<HobbyText>,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Option<String> {
        translations
            .field(requested, default, |t| t.name.as_str())
            .map(str::to_string)
    }
}
