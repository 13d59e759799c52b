// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted geofence state.
//!
//! A record couples the geofence with the overlay rectangle it was drawn
//! from and the map image it was drawn on.

use super::{geo::GeoQuad, pixel::PixelRect};
use serde::{Deserialize, Serialize};

/// Geofence state handed to the persistence gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceRecord {
    pub image: Option<String>,
    pub image_width: u32,
    pub image_height: u32,
    pub bounding_box: PixelRect,
    pub geofence: GeoQuad,
}

/// Contents of a geofence file: either a full record or a bare quad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredGeofence {
    Record(GeofenceRecord),
    Quad(GeoQuad),
}

impl StoredGeofence {
    pub fn geofence(&self) -> GeoQuad {
        match self {
            StoredGeofence::Record(record) => record.geofence,
            StoredGeofence::Quad(quad) => *quad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE_QUAD: &str = r#"
pointA: { latitude: 17.425, longitude: 78.335 }
pointB: { latitude: 17.425, longitude: 78.340 }
pointC: { latitude: 17.422, longitude: 78.340 }
pointD: { latitude: 17.422, longitude: 78.335 }
"#;

    #[test]
    fn test_bare_quad_is_accepted() {
        let stored: StoredGeofence = serde_yaml::from_str(BARE_QUAD).unwrap();
        assert!(matches!(stored, StoredGeofence::Quad(_)));
        assert_eq!(stored.geofence().point_b.longitude, 78.340);
    }

    #[test]
    fn test_full_record_is_preferred() {
        let yaml = format!(
            "image: hyd-map.png\nimageWidth: 800\nimageHeight: 400\nboundingBox: {{ top: 1.0, left: 2.0, width: 3.0, height: 4.0 }}\ngeofence:\n{}",
            BARE_QUAD
                .lines()
                .filter(|l| !l.is_empty())
                .map(|l| format!("  {}\n", l))
                .collect::<String>()
        );
        let stored: StoredGeofence = serde_yaml::from_str(&yaml).unwrap();
        match stored {
            StoredGeofence::Record(record) => {
                assert_eq!(record.image_width, 800);
                assert_eq!(record.bounding_box.width, 3.0);
                assert_eq!(record.geofence.point_d.latitude, 17.422);
            }
            StoredGeofence::Quad(_) => panic!("expected a full record"),
        }
    }
}
