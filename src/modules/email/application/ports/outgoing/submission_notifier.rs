use crate::modules::contact_message::application::domain::entities::ContactMessage;
use crate::modules::testimonial::application::domain::entities::Testimonial;

/// A visitor submission that was just stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    ContactMessage(ContactMessage),
    Testimonial(Testimonial),
}

impl Submission {
    pub fn label(&self) -> String {
        match self {
            Submission::ContactMessage(message) => message.label(),
            Submission::Testimonial(testimonial) => testimonial.label(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmissionNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Tells the site owner about new submissions. Failures never affect the
/// stored row.
#[async_trait::async_trait]
pub trait SubmissionNotifier: Send + Sync {
    async fn notify(&self, submission: &Submission) -> Result<(), SubmissionNotificationError>;
}
