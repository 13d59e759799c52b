// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Serialization and deserialization of geofence and map files.
//!
//! This module handles exporting and importing data in YAML and JSON
//! formats. The format is chosen from the file extension.

use crate::error::GeotagError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// On-disk formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self, GeotagError> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(GeotagError::UnsupportedFormat(extension.map(str::to_string))),
        }
    }
}

fn read(path: &Path) -> Result<String, GeotagError> {
    std::fs::read_to_string(path).map_err(|source| GeotagError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn write(path: &Path, contents: String) -> Result<(), GeotagError> {
    std::fs::write(path, contents).map_err(|source| GeotagError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Export data to YAML format.
pub fn export_yaml<T: Serialize>(data: &T, path: &Path) -> Result<(), GeotagError> {
    let yaml = serde_yaml::to_string(data)?;
    write(path, yaml)
}

/// Export data to JSON format.
pub fn export_json<T: Serialize>(data: &T, path: &Path) -> Result<(), GeotagError> {
    let json = serde_json::to_string_pretty(data)?;
    write(path, json)
}

/// Import data from YAML format.
pub fn import_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, GeotagError> {
    let yaml = read(path)?;
    Ok(serde_yaml::from_str(&yaml)?)
}

/// Import data from JSON format.
pub fn import_json<T: DeserializeOwned>(path: &Path) -> Result<T, GeotagError> {
    let json = read(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Export in the format implied by the file extension.
pub fn export<T: Serialize>(data: &T, path: &Path) -> Result<(), GeotagError> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(data, path),
        Format::Json => export_json(data, path),
    }
}

/// Import in the format implied by the file extension.
pub fn import<T: DeserializeOwned>(path: &Path) -> Result<T, GeotagError> {
    match Format::from_path(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    }
}
