// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persistence gateway for geofence records.
//!
//! The editor hands every committed change to a gateway and asks it for
//! previously stored state on startup. Where the record ends up is up to
//! the implementation.

use super::serialization;
use crate::error::GeotagError;
use crate::models::record::{GeofenceRecord, StoredGeofence};
use std::path::PathBuf;

/// Sink and source for persisted geofence state.
pub trait PersistenceGateway {
    /// Store the current geofence state.
    fn store(&mut self, record: &GeofenceRecord) -> Result<(), GeotagError>;

    /// Load previously stored state, if any.
    fn load(&self) -> Result<Option<StoredGeofence>, GeotagError>;
}

/// Gateway backed by a single YAML or JSON file.
#[derive(Debug, Clone)]
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    /// Create a gateway for `path`, rejecting unsupported extensions up front.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, GeotagError> {
        let path = path.into();
        serialization::Format::from_path(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PersistenceGateway for FileGateway {
    fn store(&mut self, record: &GeofenceRecord) -> Result<(), GeotagError> {
        serialization::export(record, &self.path)?;
        log::info!("Stored geofence to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredGeofence>, GeotagError> {
        if !self.path.exists() {
            log::debug!("No stored geofence at {}", self.path.display());
            return Ok(None);
        }
        let stored = serialization::import(&self.path)?;
        log::info!("Loaded geofence from {}", self.path.display());
        Ok(Some(stored))
    }
}
