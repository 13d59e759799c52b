// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Overlay rectangle in image pixel space.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in image pixels, origin at the image's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Corner positions as (x, y): top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.right(), self.top),
            (self.right(), self.bottom()),
            (self.left, self.bottom()),
        ]
    }

    /// Finite position and non-negative size.
    pub fn is_well_formed(&self) -> bool {
        [self.top, self.left, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Check that the rectangle lies fully inside an image of the given size.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.is_well_formed()
            && self.left >= 0.0
            && self.top >= 0.0
            && self.right() <= width as f64
            && self.bottom() <= height as f64
    }
}

impl Default for PixelRect {
    /// The overlay's starting position on the default map.
    fn default() -> Self {
        Self::new(210.0, 420.0, 120.0, 90.0)
    }
}
