//! Text layout and rasterization through SVG `<text>` elements
//!
//! Each line is described as SVG markup, laid out by `usvg` against the
//! font database of a [`FontSet`](crate::FontSet) and rasterized by `resvg`.
//! `y` is always the top of the line, not the baseline.

use std::sync::Arc;

use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb::Database};

use crate::error::AssetError;
use crate::utils::fonts::Face;
use crate::utils::raster;

/// One line of text at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText<'a> {
    pub text: &'a str,
    pub face: &'a Face,
    pub size: f32,
    /// CSS color, e.g. `#ffffff`
    pub fill: &'a str,
    pub x: i32,
    pub y: i32,
}

/// Measure the ink width of `text` as drawn from x = 0.
///
/// Returns `None` when nothing would be drawn: an empty string, or a face
/// the database cannot resolve.
pub fn measure(
    db: &Arc<Database>,
    text: &str,
    face: &Face,
    size: f32,
) -> Result<Option<f32>, AssetError> {
    let line = PlacedText {
        text,
        face,
        size,
        fill: "#000000",
        x: 0,
        y: 0,
    };
    let tree = parse(db, &document(1, 1, std::slice::from_ref(&line)), text)?;

    let root = tree.root();
    if !root.has_children() {
        return Ok(None);
    }

    let bbox = root.abs_bounding_box();
    if bbox.width() <= 0.0 {
        return Ok(None);
    }
    Ok(Some(bbox.width()))
}

/// Rasterize `lines` onto a transparent layer of the given size.
pub fn render_layer(
    db: &Arc<Database>,
    width: u32,
    height: u32,
    lines: &[PlacedText<'_>],
) -> Result<RgbaImage, AssetError> {
    let joined = lines.iter().map(|l| l.text).collect::<Vec<_>>().join(" / ");
    let tree = parse(db, &document(width, height, lines), &joined)?;

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| AssetError::RenderText {
        text: joined.clone(),
        reason: format!("cannot allocate {}x{} layer", width, height),
    })?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    Ok(raster::pixmap_to_rgba(&pixmap))
}

fn parse(db: &Arc<Database>, svg: &str, text: &str) -> Result<usvg::Tree, AssetError> {
    let options = usvg::Options {
        fontdb: Arc::clone(db),
        ..usvg::Options::default()
    };
    usvg::Tree::from_str(svg, &options).map_err(|e| AssetError::RenderText {
        text: text.to_string(),
        reason: e.to_string(),
    })
}

fn document(width: u32, height: u32, lines: &[PlacedText<'_>]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    );
    for line in lines {
        svg.push_str(&text_element(line));
    }
    svg.push_str("</svg>");
    svg
}

fn text_element(line: &PlacedText<'_>) -> String {
    format!(
        r#"<text x="{}" y="{}" font-family="'{}'" font-weight="{}" font-size="{}" fill="{}" dominant-baseline="text-before-edge" xml:space="preserve">{}</text>"#,
        line.x,
        line.y,
        escape(&line.face.family.replace('\'', "")),
        line.face.weight,
        line.size,
        escape(line.fill),
        escape(line.text),
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fonts::{FontOrigin, FontSet};

    fn sample_face() -> Face {
        Face {
            family: "DejaVu Sans".to_string(),
            weight: 700,
        }
    }

    #[test]
    fn escape_markup_characters() {
        assert_eq!(escape("a < b & c > \"d\""), "a &lt; b &amp; c &gt; &quot;d&quot;");
        assert_eq!(escape("prompts.dft4.me"), "prompts.dft4.me");
    }

    #[test]
    fn text_element_carries_style() {
        let face = sample_face();
        let line = PlacedText {
            text: "Prompt Templates",
            face: &face,
            size: 72.0,
            fill: "#ffffff",
            x: 310,
            y: 200,
        };

        let element = text_element(&line);

        assert!(element.contains(r#"x="310""#));
        assert!(element.contains(r#"y="200""#));
        assert!(element.contains("font-family=\"'DejaVu Sans'\""));
        assert!(element.contains(r#"font-weight="700""#));
        assert!(element.contains(r#"font-size="72""#));
        assert!(element.contains(r##"fill="#ffffff""##));
        assert!(element.contains(">Prompt Templates</text>"));
    }

    #[test]
    fn document_parses_without_fonts() {
        let db = Arc::new(Database::new());
        let face = sample_face();
        let line = PlacedText {
            text: "hello",
            face: &face,
            size: 12.0,
            fill: "#cccccc",
            x: 0,
            y: 0,
        };

        let layer = render_layer(&db, 40, 20, &[line]).unwrap();

        assert_eq!(layer.dimensions(), (40, 20));
        assert!(layer.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn measure_without_fonts_is_none() {
        let db = Arc::new(Database::new());
        let width = measure(&db, "hello", &sample_face(), 12.0).unwrap();

        assert!(width.is_none());
    }

    #[test]
    fn longer_text_measures_wider() {
        let fonts = FontSet::system();
        if fonts.origin() == FontOrigin::Unavailable {
            return;
        }
        let db = fonts.database();
        let face = fonts.body().unwrap();

        let short = measure(&db, "prompts", face, 36.0).unwrap().unwrap();
        let long = measure(&db, "prompts.dft4.me", face, 36.0).unwrap().unwrap();

        assert!(short > 0.0);
        assert!(long > short);
    }

    #[test]
    fn rendered_text_draws_ink() {
        let fonts = FontSet::system();
        if fonts.origin() == FontOrigin::Unavailable {
            return;
        }
        let db = fonts.database();
        let line = PlacedText {
            text: "Prompt Templates",
            face: fonts.title().unwrap(),
            size: 36.0,
            fill: "#ffffff",
            x: 10,
            y: 10,
        };

        let layer = render_layer(&db, 400, 80, &[line]).unwrap();

        assert!(layer.pixels().any(|p| p[3] > 0));
    }
}
