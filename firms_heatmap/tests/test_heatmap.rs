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

use uom::si::f32::ThermodynamicTemperature;
use uom::si::thermodynamic_temperature::kelvin;

use firms_common::angle::{Latitude,Longitude};
use firms_common::fs::filepath_contents_as_string;
use firms_common::geo::GeoPoint;
use firms_heatmap::{Hotspot,Hotspots};
use firms_heatmap::errors::FirmsHeatmapError;
use firms_heatmap::heatmap::*;
use tempfile::tempdir;

fn hotspot (lat: f64, lon: f64, bright: f32, date: &str) -> Hotspot {
    Hotspot {
        latitude: Latitude::from_degrees(lat),
        longitude: Longitude::from_degrees(lon),
        brightness: ThermodynamicTemperature::new::<kelvin>(bright),
        acq_date: date.parse().unwrap()
    }
}

fn test_hotspots () -> Hotspots {
    Hotspots::new( vec![
        hotspot( 34.0, -118.0, 300.5, "2024-01-01"),
        hotspot( 35.0, -119.0, 280.0, "2024-01-02")
    ])
}

#[test]
fn test_empty_set_is_a_render_error() {
    let hs = Hotspots::new( Vec::new());
    match build_hotspot_map( &hs, None) {
        Err(FirmsHeatmapError::RenderError(_)) => {}
        other => panic!("expected RenderError, got map or wrong error")
    }
}

#[test]
fn test_document_structure() {
    let map = build_hotspot_map( &test_hotspots(), None).unwrap();
    let html = map.to_html();
    println!("{html}");

    // view centered on the hotspot mean
    assert!( html.contains("setView([34.5,-118.5], 6)"));

    // one uniformly weighted density sample per hotspot
    assert!( html.contains("L.heatLayer([[34,-118],[35,-119]])"));

    // one red circle marker per hotspot, with a two line popup
    assert_eq!( html.matches("L.circleMarker(").count(), 2);
    assert!( html.contains("L.circleMarker([34,-118], {radius: 3, color: 'red', fill: true, fillColor: 'red'})"));
    assert!( html.contains("bindPopup('Brightness: 300.5<br>Date: 2024-01-01')"));
    assert!( html.contains("bindPopup('Brightness: 280<br>Date: 2024-01-02')"));

    // no highlight was provided
    assert_eq!( html.matches("L.marker(").count(), 0);

    // the density layer has to be emitted before the markers so markers draw on top
    assert!( html.find("L.heatLayer(").unwrap() < html.find("L.circleMarker(").unwrap());
}

#[test]
fn test_highlight_marker() {
    let highlight = Highlight::from_options(
        &Some("40.5865,-122.3917".to_string()), &Some("Redding, CA".to_string())).unwrap().unwrap();
    let map = build_hotspot_map( &test_hotspots(), Some(highlight)).unwrap();
    let html = map.to_html();

    // exactly one pin marker, drawn in the Leaflet default color which differs from the
    // detection marker color
    assert_eq!( html.matches("L.marker(").count(), 1);
    assert!( html.contains("L.marker([40.5865,-122.3917])"));
    assert!( html.contains("bindPopup('Redding, CA')"));

    // the highlight is added last so it renders on top of the detection markers
    assert!( html.rfind("L.circleMarker(").unwrap() < html.find("L.marker([40.5865").unwrap());
}

#[test]
fn test_highlight_requires_both_parts() {
    let coords = Some("40.5865,-122.3917".to_string());
    let label = Some("Redding, CA".to_string());

    assert!( Highlight::from_options( &coords, &None).unwrap().is_none());
    assert!( Highlight::from_options( &None, &label).unwrap().is_none());
    assert!( Highlight::from_options( &None, &None).unwrap().is_none());
    assert!( Highlight::from_options( &coords, &label).unwrap().is_some());
}

#[test]
fn test_malformed_highlight_coords() {
    match parse_highlight_coords("40.5865") {
        Err(FirmsHeatmapError::RenderError(_)) => {}
        other => panic!("expected RenderError for missing component")
    }
    assert!( parse_highlight_coords("forty,minus122").is_err());
    assert!( parse_highlight_coords("1,2,3").is_err());
    assert!( parse_highlight_coords("40.5865,-122.3917").is_ok());
}

#[test]
fn test_popup_text_is_escaped() {
    let mut map = LeafletMap::new( GeoPoint::from_lon_lat_degrees( -122.0, 40.0), DEFAULT_ZOOM);
    map.add_marker( MapMarker::pin( GeoPoint::from_lon_lat_degrees( -122.0, 40.0), "O'Brien's Camp".to_string()));

    let html = map.to_html();
    assert!( html.contains("bindPopup('O\\'Brien\\'s Camp')"));
}

#[test]
fn test_save_overwrites_previous_artifact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wildfires_heatmap.html");

    let map = build_hotspot_map( &test_hotspots(), None).unwrap();
    let saved = save_map( &map, &path).unwrap();
    assert_eq!( saved, path);

    let single = build_hotspot_map( &Hotspots::new( vec![ hotspot( 40.0, -122.0, 310.0, "2024-01-03")]), None).unwrap();
    save_map( &single, &path).unwrap();

    let html = filepath_contents_as_string( &path).unwrap();
    assert!( html.contains("setView([40,-122], 6)"));
    assert!( !html.contains("setView([34.5,-118.5], 6)"));
}
