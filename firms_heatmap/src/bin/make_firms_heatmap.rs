/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “firms-heatmap” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! end-to-end FIRMS heatmap pipeline: fetch near-real-time wildfire detections for an
//! area, store the raw CSV, load it back and render a standalone heatmap document

use std::env;
use reqwest::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use firms_common::{define_cli, check_cli, geo::GeoRect};
use firms_heatmap::errors::{Result, config_error};
use firms_heatmap::firms::{area_csv_url, fetch_area_csv, store_area_csv};
use firms_heatmap::heatmap::{build_hotspot_map, save_map, Highlight};
use firms_heatmap::read_hotspots;

define_cli! { ARGS [about="create a heatmap of wildfire detections from NASA FIRMS"] =
    api_key: Option<String> [help="FIRMS map key (default: from NASA_API_KEY environment variable)", long],
    area: String [help="area to query as \"lon_min,lat_min,lon_max,lat_max\" (default: California)", long, default_value="-124.3,32.35,-114,42"],
    satellite: String [help="satellite data source, e.g. MODIS_NRT or VIIRS_SNPP_NRT", long, default_value="MODIS_NRT"],
    time_window: u32 [help="time window in days", long, default_value="10"],
    output: String [help="output HTML file for the heatmap", long, default_value="wildfires_heatmap.html"],
    highlight_coords: Option<String> [help="coordinates to highlight, format \"lat,lon\"", long],
    highlight_popup: Option<String> [help="popup text for highlighted coordinates", long],
    csv_file: String [help="file to store the fetched CSV data in", long, default_value="fires.csv"],
    server: String [help="FIRMS server base URL", long, default_value="https://firms.modaps.eosdis.nasa.gov"]
}

#[tokio::main]
async fn main () {
    check_cli!(ARGS);
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .try_init();

    if let Err(e) = run().await {
        eprintln!("An error occurred: {e}");
        std::process::exit(1);
    }
}

async fn run () -> Result<()> {
    let map_key = get_map_key()?;
    let region: GeoRect = ARGS.area.parse().map_err( |e| config_error(e))?;
    if ARGS.time_window == 0 {
        return Err( config_error("time window must be a positive number of days"))
    }

    let url = area_csv_url( &ARGS.server, &map_key, &ARGS.satellite, &region, ARGS.time_window);
    info!("requesting {} detections of the last {} days", ARGS.satellite, ARGS.time_window);

    let client = Client::new();
    let bytes = fetch_area_csv( &client, &url).await?;
    let csv_path = store_area_csv( &bytes, &ARGS.csv_file)?;
    info!("stored {} bytes of detection data in {:?}", bytes.len(), csv_path);

    let hotspots = read_hotspots( &csv_path)?;
    info!("loaded {} detections", hotspots.len());

    let highlight = Highlight::from_options( &ARGS.highlight_coords, &ARGS.highlight_popup)?;
    let map = build_hotspot_map( &hotspots, highlight)?;
    let out_path = save_map( &map, &ARGS.output)?;

    println!("Heatmap successfully saved to '{}'.", out_path.display());
    Ok(())
}

fn get_map_key () -> Result<String> {
    ARGS.api_key.clone()
        .or_else( || env::var("NASA_API_KEY").ok())
        .ok_or_else( || config_error("NASA API key not provided - use --api-key or set NASA_API_KEY"))
}
