//! Font resolution for preview text
//!
//! Tries the configured font files first. If either cannot be loaded, falls
//! back to the system font set, and finally to the font compiled into the
//! binary, so text can always be drawn.

use std::io;
use std::path::Path;
use std::sync::Arc;

use resvg::usvg::fontdb::{Database, FaceInfo, Family, ID, Query, Stretch, Style, Weight};

/// Sans-serif families tried, in order, before any installed face.
const SANS_FAMILIES: [Family<'static>; 5] = [
    Family::Name("DejaVu Sans"),
    Family::Name("Liberation Sans"),
    Family::Name("Noto Sans"),
    Family::Name("Arial"),
    Family::SansSerif,
];

/// Where the faces in a [`FontSet`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontOrigin {
    /// Both configured font files loaded
    Configured,
    /// Configured files unavailable, faces picked from system fonts
    SystemFallback,
    /// No system fonts, using the font bundled with the binary
    BuiltIn,
    /// No usable face anywhere
    Unavailable,
}

/// A face as referenced from text markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub family: String,
    pub weight: u16,
}

impl Face {
    fn from_info(info: &FaceInfo) -> Option<Face> {
        let (family, _) = info.families.first()?;
        Some(Face {
            family: family.clone(),
            weight: info.weight.0,
        })
    }
}

/// Title and body faces plus the database they resolve against.
#[derive(Clone)]
pub struct FontSet {
    db: Arc<Database>,
    title: Option<Face>,
    body: Option<Face>,
    origin: FontOrigin,
}

impl FontSet {
    /// Load the title and body faces from font files, falling back to system
    /// fonts if either file is unusable.
    pub fn load(title_path: &Path, body_path: &Path) -> FontSet {
        let mut db = Database::new();
        let title = load_face(&mut db, title_path);
        let body = load_face(&mut db, body_path);

        match (title, body) {
            (Ok(title), Ok(body)) => FontSet {
                db: Arc::new(db),
                title: Some(title),
                body: Some(body),
                origin: FontOrigin::Configured,
            },
            _ => FontSet::system(),
        }
    }

    /// Resolve faces from the fonts installed on this machine.
    pub fn system() -> FontSet {
        let mut db = Database::new();
        db.load_system_fonts();
        FontSet::from_database(db)
    }

    /// Resolve faces from `db`, loading the bundled font if `db` has none.
    pub fn from_database(mut db: Database) -> FontSet {
        let title = query_face(&db, Weight::BOLD);
        let body = query_face(&db, Weight::NORMAL);
        if let (Some(title), Some(body)) = (title, body) {
            return FontSet {
                db: Arc::new(db),
                title: Some(title),
                body: Some(body),
                origin: FontOrigin::SystemFallback,
            };
        }

        // The bundled font has a single weight; it serves both roles.
        let builtin = load_builtin(&mut db);
        let origin = if builtin.is_some() {
            FontOrigin::BuiltIn
        } else {
            FontOrigin::Unavailable
        };

        FontSet {
            db: Arc::new(db),
            title: builtin.clone(),
            body: builtin,
            origin,
        }
    }

    pub fn origin(&self) -> FontOrigin {
        self.origin
    }

    pub fn title(&self) -> Option<&Face> {
        self.title.as_ref()
    }

    pub fn body(&self) -> Option<&Face> {
        self.body.as_ref()
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.db)
    }
}

/// Load one font file and return the first face it contributed.
fn load_face(db: &mut Database, path: &Path) -> io::Result<Face> {
    let known = face_ids(db);
    db.load_font_file(path)?;

    first_new_face(db, &known).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("no usable face in {}", path.display()),
        )
    })
}

/// Load the font embedded in the binary.
fn load_builtin(db: &mut Database) -> Option<Face> {
    let known = face_ids(db);
    db.load_font_data(epaint_default_fonts::UBUNTU_LIGHT.to_vec());
    first_new_face(db, &known)
}

fn face_ids(db: &Database) -> Vec<ID> {
    db.faces().map(|f| f.id).collect()
}

fn first_new_face(db: &Database, known: &[ID]) -> Option<Face> {
    db.faces()
        .find(|f| !known.contains(&f.id))
        .and_then(Face::from_info)
}

/// Pick a sans-serif face of the requested weight.
///
/// A known sans family wins unless it lacks the weight and some other
/// installed face is closer to it.
fn query_face(db: &Database, weight: Weight) -> Option<Face> {
    let query = Query {
        families: &SANS_FAMILIES,
        weight,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let preferred = db.query(&query).and_then(|id| db.face(id));
    let closest = closest_face(db, weight);

    let info = match (preferred, closest) {
        (Some(p), Some(c)) if weight_distance(p, weight) > weight_distance(c, weight) => c,
        (Some(p), _) => p,
        (None, c) => c?,
    };
    Face::from_info(info)
}

/// Upright proportional faces first, then nearest weight.
fn closest_face(db: &Database, weight: Weight) -> Option<&FaceInfo> {
    db.faces()
        .filter(|f| !f.families.is_empty())
        .min_by_key(|f| {
            (
                f.style != Style::Normal,
                f.monospaced,
                weight_distance(f, weight),
            )
        })
}

fn weight_distance(info: &FaceInfo, weight: Weight) -> u16 {
    info.weight.0.abs_diff(weight.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_font_file_errors() {
        let mut db = Database::new();
        let result = load_face(&mut db, Path::new("/nonexistent/font.ttf"));

        assert!(result.is_err());
    }

    #[test]
    fn garbage_font_file_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        let mut db = Database::new();
        let result = load_face(&mut db, &path);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn empty_database_uses_builtin_font() {
        let fonts = FontSet::from_database(Database::new());

        assert_eq!(fonts.origin(), FontOrigin::BuiltIn);
        assert!(fonts.title().is_some());
        assert_eq!(fonts.title(), fonts.body());
    }

    #[test]
    fn missing_files_fall_back() {
        let fonts = FontSet::load(
            Path::new("/nonexistent/bold.ttf"),
            Path::new("/nonexistent/regular.ttf"),
        );

        assert_ne!(fonts.origin(), FontOrigin::Configured);
        assert_ne!(fonts.origin(), FontOrigin::Unavailable);
        assert!(fonts.title().is_some());
        assert!(fonts.body().is_some());
    }

    #[test]
    fn closest_face_prefers_proportional_over_monospace() {
        let mut db = Database::new();
        db.load_font_data(epaint_default_fonts::HACK_REGULAR.to_vec());
        let hack = first_new_face(&db, &[]).unwrap();
        let known = face_ids(&db);
        db.load_font_data(epaint_default_fonts::UBUNTU_LIGHT.to_vec());
        let ubuntu = first_new_face(&db, &known).unwrap();

        let title = query_face(&db, Weight::BOLD).unwrap();

        assert_eq!(title, ubuntu);
        assert_ne!(title, hack);
    }

    #[test]
    fn system_title_is_bold_when_a_bold_face_exists() {
        let mut db = Database::new();
        db.load_system_fonts();
        let has_bold = db.faces().any(|f| {
            f.style == Style::Normal && !f.monospaced && (600..=800).contains(&f.weight.0)
        });
        if !has_bold {
            return;
        }

        let fonts = FontSet::from_database(db);

        assert_eq!(fonts.origin(), FontOrigin::SystemFallback);
        assert!(fonts.title().unwrap().weight >= 600);
    }
}
