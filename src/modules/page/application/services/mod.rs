pub mod render_home_page_service;
pub mod submit_page_form_service;

pub use render_home_page_service::{PageSources, RenderHomePageService};
pub use submit_page_form_service::SubmitPageFormService;
