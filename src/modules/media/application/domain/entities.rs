use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex characters of the SHA-256 digest kept in stored file names.
pub const DIGEST_PREFIX_LEN: usize = 32;

/// Upload directory, one per kind of attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Profile,
    Resume,
    Projects,
    Hobbies,
}

impl MediaCategory {
    pub const ALL: [MediaCategory; 4] = [
        MediaCategory::Profile,
        MediaCategory::Resume,
        MediaCategory::Projects,
        MediaCategory::Hobbies,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Profile => "profile",
            MediaCategory::Resume => "resume",
            MediaCategory::Projects => "projects",
            MediaCategory::Hobbies => "hobbies",
        }
    }

    /// The resume takes a PDF; every other category takes images.
    pub fn accepts(&self, kind: MediaKind) -> bool {
        match self {
            MediaCategory::Resume => kind == MediaKind::Pdf,
            _ => kind != MediaKind::Pdf,
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File formats recognised from their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Jpeg,
    Png,
    Webp,
    Gif,
    Pdf,
}

impl MediaKind {
    const ALL: [MediaKind; 5] = [
        MediaKind::Jpeg,
        MediaKind::Png,
        MediaKind::Webp,
        MediaKind::Gif,
        MediaKind::Pdf,
    ];

    /// Detects the format from magic bytes; the client's content type is
    /// never trusted.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(MediaKind::Jpeg)
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(MediaKind::Png)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(MediaKind::Webp)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(MediaKind::Gif)
        } else if bytes.starts_with(b"%PDF-") {
            Some(MediaKind::Pdf)
        } else {
            None
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.extension() == ext)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Jpeg => "jpg",
            MediaKind::Png => "png",
            MediaKind::Webp => "webp",
            MediaKind::Gif => "gif",
            MediaKind::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            MediaKind::Jpeg => "image/jpeg",
            MediaKind::Png => "image/png",
            MediaKind::Webp => "image/webp",
            MediaKind::Gif => "image/gif",
            MediaKind::Pdf => "application/pdf",
        }
    }
}

/// Limits applied to admin uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_upload_bytes: usize,
}

/// `{category}/{sha256 prefix}.{ext}`: the same bytes always land on the
/// same path.
pub fn media_path(category: MediaCategory, bytes: &[u8], kind: MediaKind) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = format!("{:x}", hasher.finalize());
    format!(
        "{}/{}.{}",
        category,
        &digest[..DIGEST_PREFIX_LEN],
        kind.extension()
    )
}

/// Resolves a requested `{category}/{file}` pair to a stored path, accepting
/// only names this module could have produced.
pub fn stored_path(category: &str, file: &str) -> Option<(String, MediaKind)> {
    let category = MediaCategory::parse(category)?;
    let (stem, ext) = file.split_once('.')?;
    if stem.len() != DIGEST_PREFIX_LEN
        || !stem.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    {
        return None;
    }
    let kind = MediaKind::from_extension(ext)?;
    if !category.accepts(kind) {
        return None;
    }
    Some((format!("{}/{}", category, file), kind))
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredMedia {
    /// Relative to the media root; this is what entities store.
    pub path: String,
    pub url: String,
    pub content_type: &'static str,
    pub size: usize,
}

impl StoredMedia {
    pub fn new(path: String, kind: MediaKind, size: usize) -> Self {
        Self {
            url: format!("/media/{}", path),
            path,
            content_type: kind.content_type(),
            size,
        }
    }
}

/// A stored file read back for serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}
