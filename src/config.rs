// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Map configuration.
//!
//! A map configuration pairs a static map image with the geographic
//! coordinates of its corners. It is fixed for the lifetime of an editor.

use crate::error::{BoundsError, GeotagError};
use crate::io::{media, serialization};
use crate::models::geo::{GeoPoint, MapBounds};
use crate::util::geometry::CoordinateMapper;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Map image and bounds as read from a configuration file.
///
/// Image dimensions may be omitted when `image_path` points at a readable
/// image; they are then taken from the image header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
    pub bounds: MapBounds,
}

impl Default for MapConfig {
    /// Hyderabad office map, 800x400.
    fn default() -> Self {
        Self {
            image_path: Some("hyd-map.png".to_string()),
            image_width: Some(800),
            image_height: Some(400),
            bounds: MapBounds {
                top_left: GeoPoint::new(17.425665, 78.334189),
                top_right: GeoPoint::new(17.425665, 78.343362),
                bottom_left: GeoPoint::new(17.421448, 78.334189),
                bottom_right: GeoPoint::new(17.421448, 78.343362),
            },
        }
    }
}

impl MapConfig {
    /// Load a configuration from a YAML or JSON file and resolve it.
    pub fn from_file(path: &Path) -> Result<Self, GeotagError> {
        let config: MapConfig = serialization::import(path)?;
        log::info!("Loaded map configuration from {}", path.display());
        config.resolve()
    }

    /// Fill in missing image dimensions and validate the result.
    pub fn resolve(mut self) -> Result<Self, GeotagError> {
        if self.image_width.is_none() || self.image_height.is_none() {
            let image_path = self.image_path.as_ref().ok_or(BoundsError::MissingDimensions)?;
            let (width, height) = media::image_dimensions(Path::new(image_path))?;
            self.image_width.get_or_insert(width);
            self.image_height.get_or_insert(height);
        }
        self.validate()?;
        Ok(self)
    }

    /// Check bounds invariants and non-zero dimensions.
    pub fn validate(&self) -> Result<(), BoundsError> {
        self.bounds.validate()?;
        let (width, height) = self.image_size()?;
        if width == 0 || height == 0 {
            return Err(BoundsError::EmptyImage { width, height });
        }
        Ok(())
    }

    /// Image (width, height) in pixels.
    pub fn image_size(&self) -> Result<(u32, u32), BoundsError> {
        match (self.image_width, self.image_height) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(BoundsError::MissingDimensions),
        }
    }

    /// Build the coordinate mapper for this map.
    pub fn mapper(&self) -> Result<CoordinateMapper, BoundsError> {
        let (width, height) = self.image_size()?;
        CoordinateMapper::new(self.bounds, width, height)
    }
}
