//! Favicon and Open Graph image generation from one source image.

mod error;
pub mod commands;
pub mod config;
pub mod utils;

pub use commands::icon::run as build_icon;
pub use commands::preview::run as build_preview;
pub use config::AssetPaths;
pub use error::AssetError;
pub use utils::fonts::{FontOrigin, FontSet};
