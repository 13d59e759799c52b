// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Map image inspection.
//!
//! Only the pixel dimensions of the map image matter to the mapping; the
//! image header is read without decoding pixel data.

use crate::error::GeotagError;
use std::path::Path;

/// Read the (width, height) of an image file.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32), GeotagError> {
    let (width, height) = image::image_dimensions(path).map_err(|source| GeotagError::Image {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Map image {}: {}x{}", path.display(), width, height);
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_png_header() {
        let path = std::env::temp_dir().join(format!("geotagger-{}-map.png", std::process::id()));
        image::RgbImage::new(16, 8).save(&path).unwrap();

        assert_eq!(image_dimensions(&path).unwrap(), (16, 8));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let err = image_dimensions(Path::new("/nonexistent/hyd-map.png")).unwrap_err();
        assert!(matches!(err, GeotagError::Image { .. }));
    }
}
