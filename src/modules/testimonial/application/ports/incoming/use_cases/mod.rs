pub mod count_pending_testimonials;
pub mod delete_testimonial;
pub mod list_approved_testimonials;
pub mod list_testimonials;
pub mod set_testimonial_approval;
pub mod submit_testimonial;

pub use count_pending_testimonials::{
    CountPendingTestimonialsError, CountPendingTestimonialsUseCase,
};
pub use delete_testimonial::{DeleteTestimonialError, DeleteTestimonialUseCase};
pub use list_approved_testimonials::{
    ListApprovedTestimonialsError, ListApprovedTestimonialsUseCase,
};
pub use list_testimonials::{ListTestimonialsError, ListTestimonialsUseCase};
pub use set_testimonial_approval::{SetTestimonialApprovalError, SetTestimonialApprovalUseCase};
pub use submit_testimonial::{
    SubmitTestimonialError, SubmitTestimonialUseCase, TestimonialSubmissionOutcome,
};
