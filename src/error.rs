// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types.

use crate::models::geo::GeoPoint;
use thiserror::Error;

/// A geofence corner lies outside the map bounds.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("geofence corner {corner} at {point} lies outside the map bounds")]
pub struct OutOfBoundsError {
    pub corner: &'static str,
    pub point: GeoPoint,
}

/// Map bounds or image dimensions that cannot define a linear mapping.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("map corner {corner} at {point} is not a valid latitude/longitude")]
    InvalidCorner { corner: &'static str, point: GeoPoint },
    #[error("map top latitude {top} must be greater than bottom latitude {bottom}")]
    NotNorthUp { top: f64, bottom: f64 },
    #[error("map right longitude {right} must be greater than left longitude {left}")]
    NotEastRight { left: f64, right: f64 },
    #[error("map image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("map image dimensions are missing and no image path is configured")]
    MissingDimensions,
}

#[derive(Error, Debug)]
pub enum GeotagError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error("invalid overlay rectangle: {0}")]
    InvalidRect(String),
    #[error("unsupported file extension: {0:?}")]
    UnsupportedFormat(Option<String>),
    #[error("failure reading or writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failure decoding YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failure reading map image {path}: {source}")]
    Image {
        path: String,
        source: image::ImageError,
    },
}
