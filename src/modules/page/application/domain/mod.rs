pub mod entities;
pub mod submission;

pub use entities::{HobbyCard, HomePage, LanguageOption, Notice, PageNotice};
pub use submission::{FormName, PageSubmission};
