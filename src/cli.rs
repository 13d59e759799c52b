// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line interface.
//!
//! Converts between overlay rectangles and geofences for a configured map
//! without a graphical front end.

use crate::app::GeofenceEditor;
use crate::config::MapConfig;
use crate::io::{gateway::FileGateway, serialization};
use crate::models::{pixel::PixelRect, record::StoredGeofence};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "geotagger", version, about = "Map geofence tagging")]
pub struct GeotagCli {
    /// map configuration file (YAML or JSON); defaults to the built-in Hyderabad map
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// print results as JSON instead of YAML
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// convert an overlay rectangle in image pixels into a geofence
    ToGeo {
        #[arg(long)]
        top: f64,
        #[arg(long)]
        left: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        /// commit the rectangle and store the resulting record in this file
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// convert a stored geofence back into an overlay rectangle
    ToPixels {
        /// geofence record or bare geofence (YAML or JSON)
        #[arg(long)]
        geofence: PathBuf,
    },
    /// print the effective map configuration
    ShowConfig,
}

impl GeotagCli {
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => MapConfig::from_file(path)
                .with_context(|| format!("loading map configuration {}", path.display()))?,
            None => MapConfig::default(),
        };

        match &self.command {
            Command::ToGeo {
                top,
                left,
                width,
                height,
                store,
            } => {
                let rect = PixelRect::new(*top, *left, *width, *height);
                let mut editor = GeofenceEditor::new(config)?;
                match store {
                    Some(path) => {
                        let mut gateway = FileGateway::new(path)?;
                        let record = editor.on_rect_released(rect, &mut gateway)?;
                        self.print(&record.geofence)
                    }
                    None => {
                        anyhow::ensure!(rect.is_well_formed(), "invalid overlay rectangle: {:?}", rect);
                        self.print(&editor.mapper().to_geo(&rect))
                    }
                }
            }
            Command::ToPixels { geofence } => {
                let stored: StoredGeofence = serialization::import(geofence)
                    .with_context(|| format!("reading geofence {}", geofence.display()))?;
                let mut editor = GeofenceEditor::new(config)?;
                editor.load(stored.geofence())?;
                self.print(editor.rect())
            }
            Command::ShowConfig => self.print(&config),
        }
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = if self.json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_yaml::to_string(value)?
        };
        println!("{}", text.trim_end());
        Ok(())
    }
}
