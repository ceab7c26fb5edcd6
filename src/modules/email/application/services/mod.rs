pub mod background;
pub mod submission_email_notifier;

pub use background::notify_in_background;
pub use submission_email_notifier::EmailSubmissionNotifier;
