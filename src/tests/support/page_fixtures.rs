use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::page::application::domain::{HomePage, LanguageOption};
use crate::modules::profile::application::domain::entities::{Profile, ProfileText};
use crate::shared::i18n::{LanguageCode, Translations};

/// An otherwise empty page in `language`, as a freshly installed site shows it.
pub fn home_page(language: &str) -> HomePage {
    let current = LanguageCode::parse(language).unwrap();
    let en = LanguageCode::parse("en").unwrap();
    let mut translations = Translations::new();
    translations.insert(en.clone(), ProfileText::placeholder());
    let profile = Profile {
        profile_picture: None,
        resume: None,
        translations,
    };

    HomePage {
        languages: vec![LanguageOption::new(&en, &current)],
        profile: profile.localize(&current, &en),
        contact_info: ContactInfo::with_default_email(),
        skills: Vec::new(),
        projects: Vec::new(),
        experiences: Vec::new(),
        educations: Vec::new(),
        hobbies: Vec::new(),
        testimonials: Vec::new(),
        notice: None,
        language: current,
    }
}
