//! Raster, font and text helpers used by the builders.

pub mod fonts;
pub mod raster;
pub mod text;
