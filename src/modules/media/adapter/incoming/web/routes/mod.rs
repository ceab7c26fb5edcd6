mod serve_media;
mod upload_media;

pub use serve_media::serve_media_handler;
pub use upload_media::upload_media_handler;
