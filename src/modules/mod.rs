pub mod auth;
pub mod contact_info;
pub mod contact_message;
pub mod content;
pub mod email;
pub mod media;
pub mod page;
pub mod profile;
pub mod testimonial;
