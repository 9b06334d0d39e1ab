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

use std::io::{Read,Write};
use std::net::TcpListener;
use std::thread;

use reqwest::Client;

use firms_common::geo::GeoRect;
use firms_heatmap::errors::FirmsHeatmapError;
use firms_heatmap::firms::*;

#[test]
fn test_area_csv_url() {
    let region: GeoRect = "-124.3,32.35,-114,42".parse().unwrap();
    let url = area_csv_url( DEFAULT_SERVER, "SECRETKEY", "MODIS_NRT", &region, 10);

    // all four area components embedded in order, unmodified, between source and day count
    assert_eq!( url, "https://firms.modaps.eosdis.nasa.gov/api/area/csv/SECRETKEY/MODIS_NRT/-124.3,32.35,-114,42/10");
}

/// serve exactly one canned HTTP response on a loopback port and return the server base URL
fn serve_once (status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn( move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read( &mut buf); // don't care about the request
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status, body.len(), body);
            let _ = stream.write_all( response.as_bytes());
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_returns_raw_body() {
    let server = serve_once( "200 OK", "latitude,longitude,brightness,acq_date\n34.0,-118.0,300.5,2024-01-01\n");
    let region: GeoRect = "-124.3,32.35,-114,42".parse().unwrap();
    let url = area_csv_url( &server, "KEY", "MODIS_NRT", &region, 3);

    let client = Client::new();
    let bytes = fetch_area_csv( &client, &url).await.unwrap();
    assert_eq!( bytes, b"latitude,longitude,brightness,acq_date\n34.0,-118.0,300.5,2024-01-01\n");
}

#[tokio::test]
async fn test_fetch_error_carries_response_body() {
    let server = serve_once( "401 Unauthorized", "Invalid MAP_KEY.");
    let region: GeoRect = "-124.3,32.35,-114,42".parse().unwrap();
    let url = area_csv_url( &server, "BADKEY", "MODIS_NRT", &region, 3);

    let client = Client::new();
    match fetch_area_csv( &client, &url).await {
        Err(e @ FirmsHeatmapError::FetchError(_)) => {
            assert!( e.to_string().contains("Invalid MAP_KEY."))
        }
        Ok(_) => panic!("fetch of non-200 response did not fail"),
        Err(other) => panic!("expected FetchError, got {other:?}")
    }
}

#[tokio::test]
async fn test_fetch_transport_failure() {
    // bind to get a free port, then drop the listener so nothing answers there
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();

    let client = Client::new();
    let res = fetch_area_csv( &client, &format!("http://127.0.0.1:{port}/api/area/csv/K/MODIS_NRT/1,2,3,4/1")).await;
    match res {
        Err(FirmsHeatmapError::ReqwestError(_)) => {}
        _ => panic!("expected ReqwestError for refused connection")
    }
}
