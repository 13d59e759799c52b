// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for map images, configuration and geofence files.

pub mod gateway;
pub mod media;
pub mod serialization;
