//! Open Graph preview image
//!
//! Layout: dark canvas, source image in the top-left corner, and three lines
//! of text centered horizontally below it.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, RgbImage};
use resvg::usvg::fontdb::Database;

use crate::error::AssetError;
use crate::utils::fonts::{Face, FontOrigin, FontSet};
use crate::utils::raster;
use crate::utils::text::{self, PlacedText};

pub const CANVAS_WIDTH: u32 = 1200;
pub const CANVAS_HEIGHT: u32 = 630;
pub const BACKGROUND: Rgba<u8> = Rgba([0x1a, 0x1a, 0x1a, 0xff]);

pub const LOGO_SIZE: u32 = 120;
pub const LOGO_X: i64 = 60;
pub const LOGO_Y: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Body,
}

impl FontRole {
    /// Point size for this role.
    pub fn size(self) -> f32 {
        match self {
            FontRole::Title => 72.0,
            FontRole::Body => 36.0,
        }
    }

    fn face(self, fonts: &FontSet) -> Option<&Face> {
        match self {
            FontRole::Title => fonts.title(),
            FontRole::Body => fonts.body(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLine {
    pub text: &'static str,
    pub role: FontRole,
    pub fill: &'static str,
    /// Top of the line in canvas pixels
    pub top: i32,
}

pub const TEXT_LINES: [TextLine; 3] = [
    TextLine {
        text: "Prompt Templates",
        role: FontRole::Title,
        fill: "#ffffff",
        top: 200,
    },
    TextLine {
        text: "Create and organize your AI prompts",
        role: FontRole::Body,
        fill: "#cccccc",
        top: 300,
    },
    TextLine {
        text: "prompts.dft4.me",
        role: FontRole::Body,
        fill: "#2D8A6D",
        top: 400,
    },
];

/// Build the preview image from `source` and write it to `output` as PNG.
pub fn run(source: &Path, output: &Path, fonts: &FontSet) -> Result<PathBuf, AssetError> {
    let image = raster::load_source(source)?;
    let canvas = render(&image, fonts)?;

    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(AssetError::EncodePreview)?;
    raster::write_output(output, &bytes)?;

    Ok(output.to_path_buf())
}

/// Compose the preview canvas in memory.
pub fn render(source: &DynamicImage, fonts: &FontSet) -> Result<RgbImage, AssetError> {
    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);

    paste_logo(&mut canvas, source);

    if fonts.origin() == FontOrigin::Unavailable {
        eprintln!("Warning: no fonts available, preview text skipped");
    } else {
        let layer = text_layer(fonts)?;
        imageops::overlay(&mut canvas, &layer, 0, 0);
    }

    Ok(DynamicImage::ImageRgba8(canvas).to_rgb8())
}

/// Place the resized source, compositing through its alpha channel if it has one.
fn paste_logo(canvas: &mut RgbaImage, source: &DynamicImage) {
    let logo = raster::resize(source, LOGO_SIZE, LOGO_SIZE).to_rgba8();

    if source.color().has_alpha() {
        imageops::overlay(canvas, &logo, LOGO_X, LOGO_Y);
    } else {
        imageops::replace(canvas, &logo, LOGO_X, LOGO_Y);
    }
}

fn text_layer(fonts: &FontSet) -> Result<RgbaImage, AssetError> {
    let db = fonts.database();
    let mut placed = Vec::with_capacity(TEXT_LINES.len());

    for line in &TEXT_LINES {
        let Some(face) = line.role.face(fonts) else {
            eprintln!("Warning: no {:?} font, skipped \"{}\"", line.role, line.text);
            continue;
        };
        match place_line(&db, line, face)? {
            Some(text) => placed.push(text),
            None => eprintln!(
                "Warning: font '{}' draws nothing for \"{}\", line skipped",
                face.family, line.text
            ),
        }
    }

    text::render_layer(&db, CANVAS_WIDTH, CANVAS_HEIGHT, &placed)
}

/// Center `line` horizontally, or `None` if `face` draws no ink for it.
fn place_line<'a>(
    db: &Arc<Database>,
    line: &TextLine,
    face: &'a Face,
) -> Result<Option<PlacedText<'a>>, AssetError> {
    let size = line.role.size();
    let Some(width) = text::measure(db, line.text, face, size)? else {
        return Ok(None);
    };

    Ok(Some(PlacedText {
        text: line.text,
        face,
        size,
        fill: line.fill,
        x: centered_x(CANVAS_WIDTH, width),
        y: line.top,
    }))
}

/// Left edge that centers a line of `text_width` pixels on the canvas.
pub fn centered_x(canvas_width: u32, text_width: f32) -> i32 {
    (canvas_width as i32 - text_width.round() as i32).div_euclid(2)
}
