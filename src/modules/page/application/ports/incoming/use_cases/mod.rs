pub mod render_home_page;
pub mod submit_page_form;

pub use render_home_page::{RenderHomePageError, RenderHomePageUseCase};
pub use submit_page_form::{PageSubmissionOutcome, SubmitPageFormError, SubmitPageFormUseCase};
