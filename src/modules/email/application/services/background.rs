use std::sync::Arc;
use std::time::Duration;

use crate::modules::email::application::ports::outgoing::{Submission, SubmissionNotifier};

const MAX_ATTEMPTS: u32 = 3;

/// Fire-and-forget notification: the visitor's request never waits on mail
/// delivery and a failure is only logged.
///
/// Nothing is queued durably; attempts still pending at shutdown are lost.
pub fn notify_in_background(
    notifier: Arc<dyn SubmissionNotifier + Send + Sync>,
    submission: Submission,
) {
    tokio::spawn(async move {
        for attempt in 1..=MAX_ATTEMPTS {
            match notifier.notify(&submission).await {
                Ok(()) => return,
                Err(e) if attempt < MAX_ATTEMPTS => {
                    tracing::warn!(
                        "Notification attempt {}/{} failed for {}: {}. Retrying...",
                        attempt,
                        MAX_ATTEMPTS,
                        submission.label(),
                        e
                    );
                    tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                }
                Err(e) => {
                    tracing::warn!(
                        "All {} notification attempts failed for {}: {}",
                        MAX_ATTEMPTS,
                        submission.label(),
                        e
                    );
                }
            }
        }
    });
}
