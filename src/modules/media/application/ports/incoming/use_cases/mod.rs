pub mod fetch_media;
pub mod upload_media;

pub use fetch_media::{FetchMediaError, FetchMediaUseCase};
pub use upload_media::{UploadMediaError, UploadMediaUseCase};
