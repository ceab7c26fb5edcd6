use async_trait::async_trait;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{
    Submission, SubmissionNotificationError, SubmissionNotifier,
};

/// Used when no notification address is configured: submissions are only
/// logged.
#[derive(Debug, Clone, Default)]
pub struct LogSubmissionNotifier;

#[async_trait]
impl SubmissionNotifier for LogSubmissionNotifier {
    async fn notify(&self, submission: &Submission) -> Result<(), SubmissionNotificationError> {
        info!("{} received (e-mail notifications disabled)", submission.label());
        Ok(())
    }
}
