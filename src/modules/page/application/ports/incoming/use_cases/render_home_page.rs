use async_trait::async_trait;

use crate::modules::page::application::domain::HomePage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderHomePageError {
    #[error("language not supported: {0}")]
    LanguageNotSupported(String),

    #[error("failed to load {section}: {message}")]
    SectionFailed {
        section: &'static str,
        message: String,
    },
}

/// Assembles the public page in the language named by the path segment.
/// Unknown `notice` codes are ignored.
#[async_trait]
pub trait RenderHomePageUseCase: Send + Sync {
    async fn execute(
        &self,
        language: &str,
        notice: Option<String>,
    ) -> Result<HomePage, RenderHomePageError>;
}
