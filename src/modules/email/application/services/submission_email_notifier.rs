use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::{
    EmailSender, Submission, SubmissionNotificationError, SubmissionNotifier,
};

/// Mails the site owner a plain-text summary of each submission.
#[derive(Clone)]
pub struct EmailSubmissionNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    notify_email: String,
}

impl fmt::Debug for EmailSubmissionNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSubmissionNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("notify_email", &self.notify_email)
            .finish()
    }
}

impl EmailSubmissionNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, notify_email: &str) -> Self {
        Self {
            sender,
            notify_email: notify_email.to_string(),
        }
    }

    fn render(submission: &Submission) -> (String, String) {
        match submission {
            Submission::ContactMessage(m) => {
                let subject = if m.subject.is_empty() {
                    format!("New contact message from {}", m.name)
                } else {
                    format!("New contact message: {}", m.subject)
                };
                let body = format!(
                    "From: {} <{}>\nSubject: {}\nReceived: {}\n\n{}\n",
                    m.name,
                    m.email,
                    m.subject,
                    m.created_at.to_rfc3339(),
                    m.message
                );
                (subject, body)
            }
            Submission::Testimonial(t) => {
                let subject = format!("New testimonial from {} awaiting approval", t.name);
                let role = if t.role_company.is_empty() {
                    "-"
                } else {
                    t.role_company.as_str()
                };
                let body = format!(
                    "Name: {}\nRole / company: {}\nReceived: {}\n\n\"{}\"\n\nApprove it from the admin before it appears on the site.\n",
                    t.name,
                    role,
                    t.created_at.to_rfc3339(),
                    t.quote
                );
                (subject, body)
            }
        }
    }
}

#[async_trait]
impl SubmissionNotifier for EmailSubmissionNotifier {
    async fn notify(&self, submission: &Submission) -> Result<(), SubmissionNotificationError> {
        let (subject, body) = Self::render(submission);

        self.sender
            .send_email(&self.notify_email, &subject, &body)
            .await
            .map_err(SubmissionNotificationError::EmailSendingFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact_message::application::domain::entities::ContactMessage;
    use crate::modules::testimonial::application::domain::entities::Testimonial;
    use chrono::Utc;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
        }
    }

    fn message() -> Submission {
        Submission::ContactMessage(ContactMessage {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
            created_at: Utc::now(),
        })
    }

    fn testimonial() -> Submission {
        Submission::Testimonial(Testimonial {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            role_company: String::new(),
            quote: "Great".to_string(),
            is_approved: false,
            created_at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn test_contact_message_is_sent_to_owner() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .withf(|to, subject, body| {
                to == "owner@example.com"
                    && subject == "New contact message: Hello"
                    && body.contains("jane@example.com")
                    && body.contains("Nice site")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let notifier = EmailSubmissionNotifier::new(Arc::new(sender), "owner@example.com");

        assert!(notifier.notify(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_testimonial_mentions_approval() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .withf(|_, subject, body| {
                subject.contains("Sam") && body.contains("Approve") && body.contains("-")
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let notifier = EmailSubmissionNotifier::new(Arc::new(sender), "owner@example.com");

        assert!(notifier.notify(&testimonial()).await.is_ok());
    }

    #[tokio::test]
    async fn test_sender_failure_is_reported() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .returning(|_, _, _| Err("smtp down".to_string()));

        let notifier = EmailSubmissionNotifier::new(Arc::new(sender), "owner@example.com");

        let err = notifier.notify(&message()).await.unwrap_err();
        assert!(matches!(
            err,
            SubmissionNotificationError::EmailSendingFailed(msg) if msg == "smtp down"
        ));
    }

    #[test]
    fn test_debug_hides_sender() {
        let notifier = EmailSubmissionNotifier::new(
            Arc::new(MockEmailSenderMock::new()),
            "owner@example.com",
        );

        assert_eq!(
            format!("{:?}", notifier),
            "EmailSubmissionNotifier { sender: \"<dyn EmailSender>\", notify_email: \"owner@example.com\" }"
        );
    }
}
