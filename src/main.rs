// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! GEOTAGGER command line entry point.

use anyhow::Result;
use clap::Parser;
use geotagger::cli::GeotagCli;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = GeotagCli::parse();
    cli.run().map_err(|e| {
        log::error!("{:#}", e);
        e
    })
}
