pub mod auth;

pub use auth::{AuthenticatedStaff, AuthenticatedUser};
