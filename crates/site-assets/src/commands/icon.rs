//! Multi-resolution favicon (ICO)

use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::DynamicImage;

use crate::error::AssetError;
use crate::utils::raster;

/// Square sizes embedded in the icon, in directory order.
pub const ICON_SIZES: [u32; 3] = [16, 32, 48];

/// Build a multi-resolution ICO from `source` and write it to `output`.
///
/// Nothing is written unless every size encodes.
pub fn run(source: &Path, output: &Path) -> Result<PathBuf, AssetError> {
    let image = raster::load_source(source)?;
    let icon_dir = build_icon_dir(&image)?;

    let mut bytes = Vec::new();
    icon_dir
        .write(&mut bytes)
        .map_err(|e| AssetError::Write {
            path: output.to_path_buf(),
            source: e,
        })?;
    raster::write_output(output, &bytes)?;

    Ok(output.to_path_buf())
}

/// Resize `image` to every icon size and bundle the results.
pub fn build_icon_dir(image: &DynamicImage) -> Result<IconDir, AssetError> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for size in ICON_SIZES {
        let rgba = raster::resize(image, size, size).to_rgba8();
        let icon_image = IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = IconDirEntry::encode(&icon_image)
            .map_err(|e| AssetError::EncodeIcon { size, source: e })?;
        icon_dir.add_entry(entry);
    }

    Ok(icon_dir)
}
