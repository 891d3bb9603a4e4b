//! Input and output locations

use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "static/favicon.png";
pub const DEFAULT_ICON: &str = "static/favicon.ico";
pub const DEFAULT_PREVIEW: &str = "static/og-image.png";
pub const DEFAULT_TITLE_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
pub const DEFAULT_BODY_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Paths read and written by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Source raster image shared by both builders
    pub source: PathBuf,
    /// Multi-resolution icon output
    pub icon: PathBuf,
    /// Social preview output
    pub preview: PathBuf,
    /// Bold face used for the preview title
    pub title_font: PathBuf,
    /// Regular face used for the subtitle and URL
    pub body_font: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            source: PathBuf::from(DEFAULT_SOURCE),
            icon: PathBuf::from(DEFAULT_ICON),
            preview: PathBuf::from(DEFAULT_PREVIEW),
            title_font: PathBuf::from(DEFAULT_TITLE_FONT),
            body_font: PathBuf::from(DEFAULT_BODY_FONT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_static_dir() {
        let paths = AssetPaths::default();
        assert_eq!(paths.source, PathBuf::from("static/favicon.png"));
        assert_eq!(paths.icon, PathBuf::from("static/favicon.ico"));
        assert_eq!(paths.preview, PathBuf::from("static/og-image.png"));
    }
}
