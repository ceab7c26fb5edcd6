pub mod login_staff;
pub mod refresh_token;

pub use login_staff::{login_staff_handler, LoginRequestDto, LoginResponse, LoginStaffInfo};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponseBody};
