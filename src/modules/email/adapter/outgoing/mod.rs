pub mod log_notifier;
pub mod smtp_sender;

pub use log_notifier::LogSubmissionNotifier;
pub use smtp_sender::SmtpEmailSender;
