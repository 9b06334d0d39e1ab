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

//! tool to download FIRMS area CSV data and store it locally

use std::env;
use anyhow::{Result,anyhow};
use reqwest::Client;

use firms_common::{define_cli, check_cli, geo::GeoRect};
use firms_heatmap::firms::{area_csv_url, fetch_area_csv, store_area_csv};

define_cli! { ARGS [about="tool to download NASA FIRMS area CSV data"] =
    api_key: Option<String> [help="FIRMS map key (default: from NASA_API_KEY environment variable)", long],
    area: String [help="area to query as \"lon_min,lat_min,lon_max,lat_max\"", long, default_value="-124.3,32.35,-114,42"],
    satellite: String [help="satellite data source", long, default_value="MODIS_NRT"],
    time_window: u32 [help="time window in days", long, default_value="10"],
    csv_file: String [help="file to store the fetched CSV data in", long, default_value="fires.csv"],
    server: String [help="FIRMS server base URL", long, default_value="https://firms.modaps.eosdis.nasa.gov"]
}

#[tokio::main]
async fn main () -> Result<()> {
    check_cli!(ARGS);

    let map_key = ARGS.api_key.clone()
        .or_else( || env::var("NASA_API_KEY").ok())
        .ok_or( anyhow!("NASA API key not provided - use --api-key or set NASA_API_KEY"))?;
    let region: GeoRect = ARGS.area.parse()?;

    let url = area_csv_url( &ARGS.server, &map_key, &ARGS.satellite, &region, ARGS.time_window);
    let client = Client::new();
    let bytes = fetch_area_csv( &client, &url).await?;
    let path = store_area_csv( &bytes, &ARGS.csv_file)?;

    println!("stored {} bytes of FIRMS data in '{}'", bytes.len(), path.display());
    Ok(())
}
