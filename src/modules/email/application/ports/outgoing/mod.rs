pub mod email_sender;
pub mod submission_notifier;

pub use email_sender::EmailSender;
pub use submission_notifier::{Submission, SubmissionNotificationError, SubmissionNotifier};
