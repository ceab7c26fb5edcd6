use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::config::SubmissionLimits;
use crate::shared::validation::{self, FieldErrors};

pub const NAME_MAX_CHARS: usize = 100;
pub const ROLE_COMPANY_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role_company: String,
    pub quote: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn label(&self) -> String {
        format!("Testimonial from {}", self.name)
    }
}

/// Public view of an approved testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedTestimonial {
    pub name: String,
    pub role_company: String,
    pub quote: String,
    pub created_at: DateTime<Utc>,
}

impl From<Testimonial> for PublishedTestimonial {
    fn from(t: Testimonial) -> Self {
        Self {
            name: t.name,
            role_company: t.role_company,
            quote: t.quote,
            created_at: t.created_at,
        }
    }
}

/// Testimonial form as typed by the visitor; `nickname` is the honeypot.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TestimonialForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role_company: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub nickname: String,
}

impl TestimonialForm {
    pub fn is_spam(&self) -> bool {
        !self.nickname.trim().is_empty()
    }

    pub fn validate(&self, limits: &SubmissionLimits) -> Result<NewTestimonial, FieldErrors> {
        let name = self.name.trim();
        let role_company = self.role_company.trim();
        let quote = self.quote.trim();

        let mut errors = FieldErrors::new();
        validation::required(&mut errors, "name", name);
        validation::max_chars(&mut errors, "name", name, NAME_MAX_CHARS);
        validation::max_chars(
            &mut errors,
            "role_company",
            role_company,
            ROLE_COMPANY_MAX_CHARS,
        );
        validation::required(&mut errors, "quote", quote);
        validation::max_chars(
            &mut errors,
            "quote",
            quote,
            limits.testimonial_quote_max_length,
        );

        errors.into_result(NewTestimonial {
            name: name.to_string(),
            role_company: role_company.to_string(),
            quote: quote.to_string(),
        })
    }
}

/// Always stored unapproved; there is no way to submit an approved one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub name: String,
    pub role_company: String,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> TestimonialForm {
        TestimonialForm {
            name: "Sam".to_string(),
            role_company: "CTO, Acme".to_string(),
            quote: "Great to work with.".to_string(),
            nickname: String::new(),
        }
    }

    #[test]
    fn valid_form_passes() {
        let new = form().validate(&SubmissionLimits::default()).unwrap();

        assert_eq!(new.name, "Sam");
        assert_eq!(new.role_company, "CTO, Acme");
    }

    #[test]
    fn role_company_is_optional() {
        let mut f = form();
        f.role_company.clear();

        assert!(f.validate(&SubmissionLimits::default()).is_ok());
    }

    #[test]
    fn quote_over_the_limit_is_rejected() {
        let limits = SubmissionLimits {
            testimonial_quote_max_length: 5,
            ..SubmissionLimits::default()
        };
        let mut f = form();
        f.quote = "too long".to_string();

        let errors = f.validate(&limits).unwrap_err();

        assert!(errors.contains("quote"));
    }

    #[test]
    fn blank_name_is_required() {
        let mut f = form();
        f.name = "   ".to_string();

        let errors = f.validate(&SubmissionLimits::default()).unwrap_err();

        assert_eq!(
            errors.get("name"),
            Some(&["This field is required.".to_string()][..])
        );
    }

    #[test]
    fn published_view_drops_moderation_fields() {
        let t = Testimonial {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            role_company: String::new(),
            quote: "Hi".to_string(),
            is_approved: true,
            created_at: Utc::now(),
        };

        assert_eq!(t.label(), "Testimonial from Sam");
        let published = PublishedTestimonial::from(t);
        let json = serde_json::to_value(&published).unwrap();
        assert!(json.get("is_approved").is_none());
        assert!(json.get("id").is_none());
    }
}
