pub mod ensure_admin;
pub mod login_staff;
pub mod refresh_token;

use std::sync::Arc;

use login_staff::ILoginStaffUseCase;
use refresh_token::IRefreshTokenUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginStaffUseCase + Send + Sync>,
    pub refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
}
