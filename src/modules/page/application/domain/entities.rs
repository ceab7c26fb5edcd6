use serde::Serialize;

use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::content::application::domain::{
    ContentRecord, Education, Experience, Hobby, HobbyIcon, LocalizedContent, Project, Skill,
};
use crate::modules::profile::application::domain::entities::LocalizedProfile;
use crate::modules::testimonial::application::domain::entities::PublishedTestimonial;
use crate::shared::i18n::LanguageCode;

// ──────────────────────────────────────────────────────────
// Notice
// ──────────────────────────────────────────────────────────

/// Flash-style message shown after a successful submission, selected by the
/// `notice` query parameter of the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    ContactSent,
    TestimonialSubmitted,
}

impl Notice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "contact_sent" => Some(Notice::ContactSent),
            "testimonial_submitted" => Some(Notice::TestimonialSubmitted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Notice::ContactSent => "contact_sent",
            Notice::TestimonialSubmitted => "testimonial_submitted",
        }
    }

    /// French when asked for, English for every other language.
    pub fn message(&self, language: &LanguageCode) -> &'static str {
        match (self, language.as_str()) {
            (Notice::ContactSent, "fr") => "Votre message a bien été envoyé !",
            (Notice::ContactSent, _) => "Your message has been sent successfully!",
            (Notice::TestimonialSubmitted, "fr") => {
                "Merci ! Votre témoignage a été soumis pour validation."
            }
            (Notice::TestimonialSubmitted, _) => {
                "Thank you! Your testimonial has been submitted for review."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageNotice {
    pub code: Notice,
    pub message: String,
}

impl PageNotice {
    pub fn new(notice: Notice, language: &LanguageCode) -> Self {
        Self {
            code: notice,
            message: notice.message(language).to_string(),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Page model
// ──────────────────────────────────────────────────────────

/// Entry of the language switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: LanguageCode,
    pub url: String,
    pub current: bool,
}

impl LanguageOption {
    pub fn new(code: &LanguageCode, current: &LanguageCode) -> Self {
        Self {
            code: code.clone(),
            url: page_url(code),
            current: code == current,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HobbyCard {
    #[serde(flatten)]
    pub hobby: LocalizedContent<Hobby>,
    pub display_icon: Option<HobbyIcon>,
}

impl HobbyCard {
    pub fn new(
        record: &ContentRecord<Hobby>,
        requested: &LanguageCode,
        default: &LanguageCode,
    ) -> Self {
        Self {
            display_icon: record.data.display_icon(),
            hobby: record.localize(requested, default),
        }
    }
}

/// Everything the public page displays, resolved for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub language: LanguageCode,
    pub languages: Vec<LanguageOption>,
    pub profile: LocalizedProfile,
    pub contact_info: ContactInfo,
    pub skills: Vec<LocalizedContent<Skill>>,
    pub projects: Vec<LocalizedContent<Project>>,
    pub experiences: Vec<LocalizedContent<Experience>>,
    pub educations: Vec<LocalizedContent<Education>>,
    pub hobbies: Vec<HobbyCard>,
    pub testimonials: Vec<PublishedTestimonial>,
    pub notice: Option<PageNotice>,
}

pub fn page_url(language: &LanguageCode) -> String {
    format!("/{}/", language)
}
