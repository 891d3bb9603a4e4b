//! Error type shared by both builders.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for asset generation.
#[derive(Debug)]
pub enum AssetError {
    LoadSource {
        path: PathBuf,
        source: image::ImageError,
    },
    EncodeIcon {
        size: u32,
        source: io::Error,
    },
    EncodePreview(image::ImageError),
    RenderText { text: String, reason: String },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::LoadSource { path, source } => {
                write!(f, "failed to load '{}': {}", path.display(), source)
            }
            AssetError::EncodeIcon { size, source } => {
                write!(f, "failed to encode {}x{} icon: {}", size, size, source)
            }
            AssetError::EncodePreview(e) => write!(f, "failed to encode PNG: {}", e),
            AssetError::RenderText { text, reason } => {
                write!(f, "failed to render text '{}': {}", text, reason)
            }
            AssetError::Write { path, source } => {
                write!(f, "failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::LoadSource { source, .. } => Some(source),
            AssetError::EncodeIcon { source, .. } => Some(source),
            AssetError::EncodePreview(e) => Some(e),
            AssetError::RenderText { .. } => None,
            AssetError::Write { source, .. } => Some(source),
        }
    }
}
