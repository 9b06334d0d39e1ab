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

//! access to the NASA FIRMS area CSV endpoint
//! (see https://firms.modaps.eosdis.nasa.gov/api/area/)

use std::path::{Path,PathBuf};

use reqwest::{Client,StatusCode};

use firms_common::fs::set_filepath_contents;
use firms_common::geo::GeoRect;

use crate::errors::*;

pub const DEFAULT_SERVER: &str = "https://firms.modaps.eosdis.nasa.gov";
pub const DEFAULT_SOURCE: &str = "MODIS_NRT";

/// assemble an area CSV request URL: {server}/api/area/csv/{map_key}/{source}/{w,s,e,n}/{days}
pub fn area_csv_url (server: &str, map_key: &str, source: &str, region: &GeoRect, days: u32) -> String {
    format!("{}/api/area/csv/{}/{}/{}/{}", server, map_key, source, region.to_wsen_string(), days)
}

/// single GET of an area CSV. A 200 response yields the raw body bytes, unmodified.
/// Everything else is a FetchError that carries the decoded response body as diagnostic
/// text (FIRMS reports map key and quota problems in the body). No retries
pub async fn fetch_area_csv (client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get( url).send().await?;

    match response.status() {
        StatusCode::OK => {
            Ok( response.bytes().await?.to_vec())
        }
        status => {
            let body = response.text().await?;
            Err( fetch_error( format!("{} ({})", body, status)))
        }
    }
}

/// store fetched bytes at path in binary mode, overwriting previous content
pub fn store_area_csv (bytes: &[u8], path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    set_filepath_contents( path, bytes)?;
    Ok( path.to_path_buf())
}
