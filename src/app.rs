// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geofence editor state.
//!
//! This module contains the owned state behind the geofence overlay: the
//! current rectangle, the geofence derived from it and the undo history.
//! Whatever captures pointer events holds a `GeofenceEditor` and calls
//! into it when the user releases the rectangle; every committed change
//! is handed to a persistence gateway.

use crate::config::MapConfig;
use crate::error::GeotagError;
use crate::io::gateway::PersistenceGateway;
use crate::models::{geo::GeoQuad, pixel::PixelRect, record::GeofenceRecord};
use crate::util::geometry::CoordinateMapper;

/// History system for undo/redo functionality.
#[derive(Debug)]
struct History {
    /// Undo stack (past rectangles)
    undo_stack: Vec<PixelRect>,
    /// Redo stack (future rectangles after undo)
    redo_stack: Vec<PixelRect>,
    /// Maximum history size
    max_size: usize,
}

impl History {
    fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: 50,
        }
    }

    /// Save current rectangle before making a change
    fn push(&mut self, rect: PixelRect) {
        self.undo_stack.push(rect);
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
        // a new change invalidates anything undone
        self.redo_stack.clear();
    }

    fn undo(&mut self, current: PixelRect) -> Option<PixelRect> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    fn redo(&mut self, current: PixelRect) -> Option<PixelRect> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Owned state of the geofence overlay for one map.
#[derive(Debug)]
pub struct GeofenceEditor {
    /// Map image and bounds
    config: MapConfig,

    /// Pixel/geo mapping for the configured map
    mapper: CoordinateMapper,

    /// Current overlay rectangle
    rect: PixelRect,

    /// Geofence matching `rect`
    geofence: GeoQuad,

    /// History for undo/redo
    history: History,
}

impl GeofenceEditor {
    /// Create an editor showing the default rectangle.
    pub fn new(config: MapConfig) -> Result<Self, GeotagError> {
        let mapper = config.mapper()?;
        let rect = PixelRect::default();
        let geofence = mapper.to_geo(&rect);
        Ok(Self {
            config,
            mapper,
            rect,
            geofence,
            history: History::new(),
        })
    }

    /// Prepare the overlay, seeding it from a stored geofence when one is given.
    ///
    /// A stored geofence outside the map is rejected and the default
    /// rectangle is kept.
    pub fn render(&mut self, initial: Option<GeoQuad>) -> Result<(), GeotagError> {
        if let Some(geofence) = initial {
            self.load(geofence)?;
        }
        log::info!("Geofence overlay at {:?}", self.rect);
        Ok(())
    }

    /// Render from whatever the gateway has stored.
    pub fn render_from(&mut self, gateway: &dyn PersistenceGateway) -> Result<(), GeotagError> {
        let stored = gateway.load()?;
        self.render(stored.map(|s| s.geofence()))
    }

    /// Reposition the overlay from a geofence.
    ///
    /// The rectangle is taken from points A, B and D and the stored geofence
    /// is rebuilt from it. A geofence whose corners are out of order (A not
    /// north-west of C) is rejected. On failure the current rectangle and
    /// geofence are left untouched.
    pub fn load(&mut self, geofence: GeoQuad) -> Result<(), GeotagError> {
        let rect = self.mapper.to_pixels(&geofence).map_err(|e| {
            log::warn!("Rejected geofence: {}", e);
            e
        })?;
        if !rect.is_well_formed() {
            log::warn!("Rejected geofence {:?}: corners out of order", geofence);
            return Err(GeotagError::InvalidRect(format!("{:?}", rect)));
        }
        self.rect = rect;
        self.geofence = self.mapper.to_geo(&rect);
        self.history.clear();
        log::info!("Loaded geofence {:?} as {:?}", self.geofence, self.rect);
        Ok(())
    }

    /// Commit the rectangle left behind when the user releases the pointer.
    ///
    /// Rotation is locked, so only position and size are taken. The new
    /// state is stored through `gateway` and returned.
    pub fn on_rect_released(
        &mut self,
        rect: PixelRect,
        gateway: &mut dyn PersistenceGateway,
    ) -> Result<GeofenceRecord, GeotagError> {
        if !rect.is_well_formed() {
            return Err(GeotagError::InvalidRect(format!("{:?}", rect)));
        }
        let (width, height) = self.mapper.image_size();
        if !rect.fits_within(width, height) {
            log::warn!("Rectangle {:?} extends past the {}x{} map image", rect, width, height);
        }
        self.history.push(self.rect);
        self.commit(rect, gateway)
    }

    /// Step back to the previous rectangle, storing the result.
    ///
    /// Returns `Ok(None)` when there is nothing to undo.
    pub fn undo(
        &mut self,
        gateway: &mut dyn PersistenceGateway,
    ) -> Result<Option<GeofenceRecord>, GeotagError> {
        match self.history.undo(self.rect) {
            Some(previous) => {
                log::debug!("Undo to {:?}", previous);
                self.commit(previous, gateway).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Re-apply an undone rectangle, storing the result.
    pub fn redo(
        &mut self,
        gateway: &mut dyn PersistenceGateway,
    ) -> Result<Option<GeofenceRecord>, GeotagError> {
        match self.history.redo(self.rect) {
            Some(next) => {
                log::debug!("Redo to {:?}", next);
                self.commit(next, gateway).map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn rect(&self) -> &PixelRect {
        &self.rect
    }

    pub fn geofence(&self) -> &GeoQuad {
        &self.geofence
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Current state as handed to the persistence gateway.
    pub fn record(&self) -> GeofenceRecord {
        let (image_width, image_height) = self.mapper.image_size();
        GeofenceRecord {
            image: self.config.image_path.clone(),
            image_width,
            image_height,
            bounding_box: self.rect,
            geofence: self.geofence,
        }
    }

    fn commit(
        &mut self,
        rect: PixelRect,
        gateway: &mut dyn PersistenceGateway,
    ) -> Result<GeofenceRecord, GeotagError> {
        self.rect = rect;
        self.geofence = self.mapper.to_geo(&rect);
        log::info!("Bounding box {:?} -> geofence {:?}", self.rect, self.geofence);

        let record = self.record();
        gateway.store(&record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{geo::GeoPoint, record::StoredGeofence};

    /// Gateway that keeps everything in memory.
    #[derive(Default)]
    struct MemoryGateway {
        stored: Vec<GeofenceRecord>,
        preset: Option<StoredGeofence>,
    }

    impl PersistenceGateway for MemoryGateway {
        fn store(&mut self, record: &GeofenceRecord) -> Result<(), GeotagError> {
            self.stored.push(record.clone());
            Ok(())
        }

        fn load(&self) -> Result<Option<StoredGeofence>, GeotagError> {
            Ok(self.preset.clone())
        }
    }

    fn editor() -> GeofenceEditor {
        GeofenceEditor::new(MapConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_with_default_box() {
        let editor = editor();
        assert_eq!(*editor.rect(), PixelRect::new(210.0, 420.0, 120.0, 90.0));
        assert_eq!(*editor.geofence(), editor.mapper().to_geo(editor.rect()));
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_release_emits_record() {
        let mut editor = editor();
        let mut gateway = MemoryGateway::default();
        let rect = PixelRect::new(0.0, 0.0, 800.0, 400.0);

        let record = editor.on_rect_released(rect, &mut gateway).unwrap();

        assert_eq!(gateway.stored, vec![record.clone()]);
        assert_eq!(record.bounding_box, rect);
        assert_eq!(record.geofence, MapConfig::default().bounds.as_quad());
        assert_eq!(record.image.as_deref(), Some("hyd-map.png"));
        assert!(editor.can_undo());
    }

    #[test]
    fn test_release_rejects_negative_size() {
        let mut editor = editor();
        let mut gateway = MemoryGateway::default();
        let result = editor.on_rect_released(PixelRect::new(0.0, 0.0, -5.0, 10.0), &mut gateway);

        assert!(matches!(result, Err(GeotagError::InvalidRect(_))));
        assert!(gateway.stored.is_empty());
        assert_eq!(*editor.rect(), PixelRect::default());
    }

    #[test]
    fn test_load_out_of_bounds_keeps_prior_state() {
        let mut editor = editor();
        let mut gateway = MemoryGateway::default();
        let rect = PixelRect::new(10.0, 20.0, 30.0, 40.0);
        editor.on_rect_released(rect, &mut gateway).unwrap();
        let geofence = *editor.geofence();

        let mut outside = MapConfig::default().bounds.as_quad();
        outside.point_a.latitude = 17.43;
        let result = editor.load(outside);

        assert!(matches!(result, Err(GeotagError::OutOfBounds(_))));
        assert_eq!(*editor.rect(), rect);
        assert_eq!(*editor.geofence(), geofence);
    }

    #[test]
    fn test_load_flipped_geofence_keeps_prior_state() {
        let mut editor = editor();
        let prior = *editor.geofence();
        let quad = prior;
        let flipped = GeoQuad {
            point_a: quad.point_c,
            point_b: quad.point_d,
            point_c: quad.point_a,
            point_d: quad.point_b,
        };

        let result = editor.load(flipped);

        assert!(matches!(result, Err(GeotagError::InvalidRect(_))));
        assert_eq!(*editor.rect(), PixelRect::default());
        assert_eq!(*editor.geofence(), prior);
        assert!(editor.rect().is_well_formed());
    }

    #[test]
    fn test_load_rebuilds_geofence_from_rect() {
        let mut editor = editor();
        let mut quad = *editor.geofence();
        quad.point_c = GeoPoint::new(17.4216, 78.342);

        editor.load(quad).unwrap();

        assert_eq!(*editor.geofence(), editor.mapper().to_geo(editor.rect()));
        assert_ne!(editor.geofence().point_c, quad.point_c);
        assert_eq!(editor.record().geofence, *editor.geofence());
    }

    #[test]
    fn test_render_seeds_from_stored_geofence() {
        let mut editor = editor();
        let bounds = MapConfig::default().bounds;
        let gateway = MemoryGateway {
            preset: Some(StoredGeofence::Quad(bounds.as_quad())),
            ..Default::default()
        };

        editor.render_from(&gateway).unwrap();
        assert_eq!(*editor.rect(), PixelRect::new(0.0, 0.0, 800.0, 400.0));
        assert_eq!(*editor.geofence(), bounds.as_quad());
    }

    #[test]
    fn test_render_without_stored_state_keeps_default() {
        let mut editor = editor();
        editor.render(None).unwrap();
        assert_eq!(*editor.rect(), PixelRect::default());
    }

    #[test]
    fn test_undo_redo() {
        let mut editor = editor();
        let mut gateway = MemoryGateway::default();
        let first = PixelRect::new(10.0, 10.0, 10.0, 10.0);
        let second = PixelRect::new(20.0, 20.0, 20.0, 20.0);
        editor.on_rect_released(first, &mut gateway).unwrap();
        editor.on_rect_released(second, &mut gateway).unwrap();

        let undone = editor.undo(&mut gateway).unwrap().unwrap();
        assert_eq!(undone.bounding_box, first);
        assert_eq!(*editor.geofence(), editor.mapper().to_geo(&first));
        assert!(editor.can_redo());

        let redone = editor.redo(&mut gateway).unwrap().unwrap();
        assert_eq!(redone.bounding_box, second);
        assert!(!editor.can_redo());
        assert_eq!(gateway.stored.len(), 4);
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut editor = editor();
        let mut gateway = MemoryGateway::default();
        assert!(editor.undo(&mut gateway).unwrap().is_none());
        assert!(gateway.stored.is_empty());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for i in 0..60 {
            history.push(PixelRect::new(i as f64, 0.0, 1.0, 1.0));
        }
        assert_eq!(history.undo_stack.len(), 50);
        assert_eq!(history.undo_stack[0].top, 10.0);
    }

    #[test]
    fn test_release_then_load_roundtrip() {
        let mut editor = editor();
        let mut gateway = MemoryGateway::default();
        let rect = PixelRect::new(100.0, 250.0, 64.0, 32.0);
        let record = editor.on_rect_released(rect, &mut gateway).unwrap();

        let mut fresh = GeofenceEditor::new(MapConfig::default()).unwrap();
        fresh.load(record.geofence).unwrap();
        let loaded = fresh.rect();
        assert!((loaded.top - rect.top).abs() < 1e-6);
        assert!((loaded.left - rect.left).abs() < 1e-6);
        assert!((loaded.width - rect.width).abs() < 1e-6);
        assert!((loaded.height - rect.height).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = MapConfig::default();
        config.bounds.top_right = GeoPoint::new(17.425665, 78.0);
        assert!(GeofenceEditor::new(config).is_err());
    }
}
