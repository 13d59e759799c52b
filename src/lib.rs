// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! GEOTAGGER - map geofence tagging
//!
//! Converts a rectangle drawn over a static map image into the four
//! geographic corners of a geofence, and a stored geofence back into the
//! rectangle, using a flat linear mapping between image pixels and the
//! map's latitude/longitude bounds.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod util;

pub use app::GeofenceEditor;
pub use config::MapConfig;
pub use error::{BoundsError, GeotagError, OutOfBoundsError};
pub use models::{
    geo::{GeoPoint, GeoQuad, MapBounds},
    pixel::PixelRect,
    record::GeofenceRecord,
};
pub use util::geometry::{to_geo, to_pixels, CoordinateMapper};
