mod count_pending_testimonials;
mod delete_testimonial;
mod list_testimonials;
mod set_testimonial_approval;

use serde::Serialize;

use crate::modules::testimonial::application::domain::entities::Testimonial;

pub use count_pending_testimonials::count_pending_testimonials_handler;
pub use delete_testimonial::delete_testimonial_handler;
pub use list_testimonials::list_testimonials_handler;
pub use set_testimonial_approval::{
    approve_testimonials_handler, reject_testimonials_handler, TestimonialIdsRequest,
};

#[derive(Debug, Serialize)]
pub struct TestimonialResponse {
    #[serde(flatten)]
    pub testimonial: Testimonial,
    pub label: String,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(testimonial: Testimonial) -> Self {
        Self {
            label: testimonial.label(),
            testimonial,
        }
    }
}
