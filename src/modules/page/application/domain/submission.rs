use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::modules::contact_message::application::domain::entities::ContactForm;
use crate::modules::testimonial::application::domain::entities::TestimonialForm;

pub const SUBMIT_CONTACT: &str = "submit_contact";
pub const SUBMIT_TESTIMONIAL: &str = "submit_testimonial";

/// The two forms sharing the public page. Their inputs are namespaced with
/// `{form}-` so both can live in one HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormName {
    Contact,
    Testimonial,
}

impl FormName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormName::Contact => "contact",
            FormName::Testimonial => "testimonial",
        }
    }

    pub fn prefix(&self) -> String {
        format!("{}-", self.as_str())
    }

    /// The submitted inputs of this form, honeypot left out, for redisplay.
    pub fn values(&self, fields: &HashMap<String, String>) -> BTreeMap<String, String> {
        let prefix = self.prefix();
        let honeypot = format!("{}nickname", prefix);
        fields
            .iter()
            .filter(|(name, _)| name.starts_with(&prefix) && **name != honeypot)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

/// A page POST decoded into the form it belongs to.
#[derive(Debug, Clone)]
pub enum PageSubmission {
    Contact(ContactForm),
    Testimonial(TestimonialForm),
}

impl PageSubmission {
    /// `None` when no submit discriminator is present. The contact form wins
    /// if a client sends both.
    pub fn from_fields(fields: &HashMap<String, String>) -> Option<Self> {
        if fields.contains_key(SUBMIT_CONTACT) {
            let get = |name: &str| field(fields, FormName::Contact, name);
            return Some(PageSubmission::Contact(ContactForm {
                name: get("name"),
                email: get("email"),
                subject: get("subject"),
                message: get("message"),
                nickname: get("nickname"),
            }));
        }

        if fields.contains_key(SUBMIT_TESTIMONIAL) {
            let get = |name: &str| field(fields, FormName::Testimonial, name);
            return Some(PageSubmission::Testimonial(TestimonialForm {
                name: get("name"),
                role_company: get("role_company"),
                quote: get("quote"),
                nickname: get("nickname"),
            }));
        }

        None
    }

    pub fn form(&self) -> FormName {
        match self {
            PageSubmission::Contact(_) => FormName::Contact,
            PageSubmission::Testimonial(_) => FormName::Testimonial,
        }
    }
}

fn field(fields: &HashMap<String, String>, form: FormName, name: &str) -> String {
    fields
        .get(&format!("{}{}", form.prefix(), name))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn contact_fields_are_read_from_prefixed_inputs() {
        let submission = PageSubmission::from_fields(&fields(&[
            ("submit_contact", ""),
            ("contact-name", "Jane"),
            ("contact-email", "jane@example.com"),
            ("contact-message", "Hi"),
            ("testimonial-name", "Ignored"),
        ]))
        .unwrap();

        match submission {
            PageSubmission::Contact(form) => {
                assert_eq!(form.name, "Jane");
                assert_eq!(form.email, "jane@example.com");
                assert_eq!(form.subject, "");
                assert!(!form.is_spam());
            }
            other => panic!("unexpected submission {:?}", other),
        }
    }

    #[test]
    fn testimonial_discriminator_selects_testimonial_form() {
        let submission = PageSubmission::from_fields(&fields(&[
            ("submit_testimonial", "Send"),
            ("testimonial-name", "Sam"),
            ("testimonial-role_company", "CTO"),
            ("testimonial-quote", "Great"),
            ("testimonial-nickname", "bot"),
        ]))
        .unwrap();

        assert_eq!(submission.form(), FormName::Testimonial);
        match submission {
            PageSubmission::Testimonial(form) => {
                assert_eq!(form.role_company, "CTO");
                assert!(form.is_spam());
            }
            other => panic!("unexpected submission {:?}", other),
        }
    }

    #[test]
    fn missing_discriminator_is_unknown() {
        assert!(PageSubmission::from_fields(&fields(&[("contact-name", "Jane")])).is_none());
    }

    #[test]
    fn values_keep_own_inputs_without_honeypot() {
        let values = FormName::Contact.values(&fields(&[
            ("submit_contact", ""),
            ("contact-name", "Jane"),
            ("contact-nickname", "bot"),
            ("testimonial-name", "Sam"),
        ]));

        assert_eq!(values.len(), 1);
        assert_eq!(values["contact-name"], "Jane");
    }
}
