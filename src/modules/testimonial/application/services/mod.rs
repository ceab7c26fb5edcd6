pub mod count_pending_testimonials_service;
pub mod delete_testimonial_service;
pub mod list_approved_testimonials_service;
pub mod list_testimonials_service;
pub mod set_testimonial_approval_service;
pub mod submit_testimonial_service;

pub use count_pending_testimonials_service::CountPendingTestimonialsService;
pub use delete_testimonial_service::DeleteTestimonialService;
pub use list_approved_testimonials_service::ListApprovedTestimonialsService;
pub use list_testimonials_service::ListTestimonialsService;
pub use set_testimonial_approval_service::SetTestimonialApprovalService;
pub use submit_testimonial_service::SubmitTestimonialService;
