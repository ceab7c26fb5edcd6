pub mod fetch_media_service;
pub mod upload_media_service;

pub use fetch_media_service::FetchMediaService;
pub use upload_media_service::UploadMediaService;
