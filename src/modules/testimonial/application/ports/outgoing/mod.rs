pub mod testimonial_repository;

pub use testimonial_repository::{TestimonialRepository, TestimonialRepositoryError};
