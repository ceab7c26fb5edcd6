use async_trait::async_trait;

use crate::modules::page::application::domain::entities::page_url;
use crate::modules::page::application::domain::{FormName, Notice, PageSubmission};
use crate::shared::i18n::LanguageCode;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitPageFormError {
    #[error("language not supported: {0}")]
    LanguageNotSupported(String),

    /// Field names are the form's own (`email`), not the prefixed inputs.
    #[error("invalid {form:?} form: {errors}")]
    Validation { form: FormName, errors: FieldErrors },

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSubmissionOutcome {
    Accepted {
        language: LanguageCode,
        notice: Notice,
    },
    /// Honeypot filled in; the visitor is sent back without a notice.
    Discarded { language: LanguageCode },
}

impl PageSubmissionOutcome {
    /// Where the visitor goes next.
    pub fn location(&self) -> String {
        match self {
            PageSubmissionOutcome::Accepted { language, notice } => {
                format!("{}?notice={}", page_url(language), notice.as_str())
            }
            PageSubmissionOutcome::Discarded { language } => page_url(language),
        }
    }
}

#[async_trait]
pub trait SubmitPageFormUseCase: Send + Sync {
    async fn execute(
        &self,
        language: &str,
        submission: PageSubmission,
    ) -> Result<PageSubmissionOutcome, SubmitPageFormError>;
}
