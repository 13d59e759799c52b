// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts between the overlay rectangle in image pixels and
//! the geofence in latitude/longitude. Pixels are first normalized to the
//! image (0.0 to 1.0) and then interpolated linearly across the map bounds.
//! No projection correction is applied.

use crate::error::{BoundsError, OutOfBoundsError};
use crate::models::{
    geo::{GeoPoint, GeoQuad, MapBounds},
    pixel::PixelRect,
};

/// Convert pixel coordinates to normalized coordinates (0.0 to 1.0).
pub fn normalize_coordinates(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> (f64, f64) {
    (pixel_x / width as f64, pixel_y / height as f64)
}

/// Convert normalized coordinates to pixel coordinates.
pub fn denormalize_coordinates(x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
    (x * width as f64, y * height as f64)
}

/// Geographic position of a single image pixel.
pub fn pixel_to_geo(pixel_x: f64, pixel_y: f64, bounds: &MapBounds, width: u32, height: u32) -> GeoPoint {
    let (x, y) = normalize_coordinates(pixel_x, pixel_y, width, height);
    GeoPoint {
        latitude: bounds.top_left.latitude - bounds.latitude_span() * y,
        longitude: bounds.top_left.longitude + bounds.longitude_span() * x,
    }
}

/// Pixel position of a geographic point; the inverse of [`pixel_to_geo`].
pub fn geo_to_pixel(point: &GeoPoint, bounds: &MapBounds, width: u32, height: u32) -> (f64, f64) {
    let x = (point.longitude - bounds.top_left.longitude) / bounds.longitude_span();
    let y = (bounds.top_left.latitude - point.latitude) / bounds.latitude_span();
    denormalize_coordinates(x, y, width, height)
}

/// Convert the overlay rectangle into the geofence.
///
/// Corners are mapped in top-left, top-right, bottom-right, bottom-left
/// order and become points A, B, C, D.
pub fn to_geo(rect: &PixelRect, bounds: &MapBounds, width: u32, height: u32) -> GeoQuad {
    let [a, b, c, d] = rect
        .corners()
        .map(|(x, y)| pixel_to_geo(x, y, bounds, width, height));
    GeoQuad {
        point_a: a,
        point_b: b,
        point_c: c,
        point_d: d,
    }
}

/// Convert a geofence back into the overlay rectangle.
///
/// Every corner must lie within `bounds` (edges included). Position comes
/// from point A, width from point B and height from point D.
pub fn to_pixels(
    quad: &GeoQuad,
    bounds: &MapBounds,
    width: u32,
    height: u32,
) -> Result<PixelRect, OutOfBoundsError> {
    if let Some((corner, point)) = quad
        .corners()
        .into_iter()
        .find(|(_, point)| !bounds.contains(point))
    {
        return Err(OutOfBoundsError { corner, point });
    }

    let (left, top) = geo_to_pixel(&quad.point_a, bounds, width, height);
    let (right, _) = geo_to_pixel(&quad.point_b, bounds, width, height);
    let (_, bottom) = geo_to_pixel(&quad.point_d, bounds, width, height);

    Ok(PixelRect {
        top,
        left,
        width: right - left,
        height: bottom - top,
    })
}

/// Fixed correspondence between one map image and its geographic bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: MapBounds,
    width: u32,
    height: u32,
}

impl CoordinateMapper {
    /// Create a mapper for validated bounds and a non-empty image.
    pub fn new(bounds: MapBounds, width: u32, height: u32) -> Result<Self, BoundsError> {
        bounds.validate()?;
        if width == 0 || height == 0 {
            return Err(BoundsError::EmptyImage { width, height });
        }
        Ok(Self {
            bounds,
            width,
            height,
        })
    }

    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn to_geo(&self, rect: &PixelRect) -> GeoQuad {
        to_geo(rect, &self.bounds, self.width, self.height)
    }

    pub fn to_pixels(&self, quad: &GeoQuad) -> Result<PixelRect, OutOfBoundsError> {
        to_pixels(quad, &self.bounds, self.width, self.height)
    }
}
