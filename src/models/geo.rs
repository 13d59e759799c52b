// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geographic data structures.
//!
//! This module defines geographic points, the fixed bounds of a map image,
//! and the four-cornered geofence derived from the overlay rectangle.

use crate::error::BoundsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check that the point is finite and inside [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Geographic coordinates of the four corners of the map image.
///
/// The map is assumed north-up and east-right: the top edge has a greater
/// latitude than the bottom edge and the right edge a greater longitude
/// than the left edge. Only `top_left`, `top_right` and `bottom_left`
/// take part in the linear mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    pub top_left: GeoPoint,
    pub top_right: GeoPoint,
    pub bottom_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

/// Tolerance used when checking that `bottom_right` agrees with the other corners.
const CORNER_TOLERANCE: f64 = 1e-9;

impl MapBounds {
    /// Create validated bounds.
    pub fn new(
        top_left: GeoPoint,
        top_right: GeoPoint,
        bottom_left: GeoPoint,
        bottom_right: GeoPoint,
    ) -> Result<Self, BoundsError> {
        let bounds = Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the north-up, east-right invariants and coordinate ranges.
    pub fn validate(&self) -> Result<(), BoundsError> {
        for (name, point) in self.named_corners() {
            if !point.is_valid() {
                return Err(BoundsError::InvalidCorner { corner: name, point });
            }
        }
        if self.top_left.latitude <= self.bottom_left.latitude {
            return Err(BoundsError::NotNorthUp {
                top: self.top_left.latitude,
                bottom: self.bottom_left.latitude,
            });
        }
        if self.top_right.longitude <= self.top_left.longitude {
            return Err(BoundsError::NotEastRight {
                left: self.top_left.longitude,
                right: self.top_right.longitude,
            });
        }
        if !self.is_axis_aligned() {
            log::warn!(
                "bottomRight corner {} does not match the linear mapping ({}, {}); it is ignored",
                self.bottom_right,
                self.bottom_left.latitude,
                self.top_right.longitude
            );
        }
        Ok(())
    }

    /// Latitude extent from top edge to bottom edge (positive).
    pub fn latitude_span(&self) -> f64 {
        self.top_left.latitude - self.bottom_left.latitude
    }

    /// Longitude extent from left edge to right edge (positive).
    pub fn longitude_span(&self) -> f64 {
        self.top_right.longitude - self.top_left.longitude
    }

    /// Whether a point lies inside the bounds, edges included.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude <= self.top_left.latitude
            && point.latitude >= self.bottom_left.latitude
            && point.longitude >= self.top_left.longitude
            && point.longitude <= self.top_right.longitude
    }

    /// The bounds expressed as a geofence covering the whole map.
    pub fn as_quad(&self) -> GeoQuad {
        GeoQuad {
            point_a: self.top_left,
            point_b: self.top_right,
            point_c: self.bottom_right,
            point_d: self.bottom_left,
        }
    }

    fn is_axis_aligned(&self) -> bool {
        (self.bottom_right.latitude - self.bottom_left.latitude).abs() < CORNER_TOLERANCE
            && (self.bottom_right.longitude - self.top_right.longitude).abs() < CORNER_TOLERANCE
            && (self.top_right.latitude - self.top_left.latitude).abs() < CORNER_TOLERANCE
            && (self.bottom_left.longitude - self.top_left.longitude).abs() < CORNER_TOLERANCE
    }

    fn named_corners(&self) -> [(&'static str, GeoPoint); 4] {
        [
            ("topLeft", self.top_left),
            ("topRight", self.top_right),
            ("bottomLeft", self.bottom_left),
            ("bottomRight", self.bottom_right),
        ]
    }
}

/// The four corners of a geofence.
///
/// Corners follow the overlay rectangle: A is top-left, B top-right,
/// C bottom-right and D bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoQuad {
    pub point_a: GeoPoint,
    pub point_b: GeoPoint,
    pub point_c: GeoPoint,
    pub point_d: GeoPoint,
}

impl GeoQuad {
    /// Corners paired with their names, in A, B, C, D order.
    pub fn corners(&self) -> [(&'static str, GeoPoint); 4] {
        [
            ("pointA", self.point_a),
            ("pointB", self.point_b),
            ("pointC", self.point_c),
            ("pointD", self.point_d),
        ]
    }
}
