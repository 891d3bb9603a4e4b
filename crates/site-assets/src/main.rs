//! Command-line entry point: builds the icon, then the preview, reporting each.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use clap::Parser;
use site_assets::config::{
    DEFAULT_BODY_FONT, DEFAULT_ICON, DEFAULT_PREVIEW, DEFAULT_SOURCE, DEFAULT_TITLE_FONT,
};
use site_assets::{AssetPaths, FontSet};

#[derive(Parser)]
#[command(name = "site-assets")]
#[command(about = "Create favicon.ico and og-image.png from an existing favicon.png")]
struct Cli {
    /// Source image shared by both outputs
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Output path for the multi-resolution icon
    #[arg(long, default_value = DEFAULT_ICON)]
    icon: PathBuf,

    /// Output path for the 1200x630 preview image
    #[arg(long, default_value = DEFAULT_PREVIEW)]
    preview: PathBuf,

    /// Bold font file for the preview title
    #[arg(long, default_value = DEFAULT_TITLE_FONT)]
    title_font: PathBuf,

    /// Regular font file for the preview subtitle and URL
    #[arg(long, default_value = DEFAULT_BODY_FONT)]
    body_font: PathBuf,
}

impl From<Cli> for AssetPaths {
    fn from(cli: Cli) -> Self {
        AssetPaths {
            source: cli.source,
            icon: cli.icon,
            preview: cli.preview,
            title_font: cli.title_font,
            body_font: cli.body_font,
        }
    }
}

fn main() {
    let paths = AssetPaths::from(Cli::parse());

    println!("Creating favicon.ico and og-image.png...");

    report(&paths.icon, site_assets::build_icon(&paths.source, &paths.icon));

    let fonts = FontSet::load(&paths.title_font, &paths.body_font);
    report(
        &paths.preview,
        site_assets::build_preview(&paths.source, &paths.preview, &fonts),
    );

    println!("Done!");
}

/// Print the outcome of one builder. Failures never change the exit status.
fn report<E: Display>(output: &Path, result: Result<PathBuf, E>) {
    println!("{}", status_line(output, &result));
}

fn status_line<E: Display>(output: &Path, result: &Result<PathBuf, E>) -> String {
    match result {
        Ok(path) => format!("✅ Created {}", path.display()),
        Err(e) => format!("❌ Error creating {}: {}", output.display(), e),
    }
}
