// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geofence data model.

pub mod geo;
pub mod pixel;
pub mod record;
