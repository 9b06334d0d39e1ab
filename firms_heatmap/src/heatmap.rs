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

//! composition of interactive hotspot heatmaps and their serialization into
//! standalone HTML documents

use std::fmt::Write;
use std::path::{Path,PathBuf};

use firms_common::fs::set_filepath_contents;
use firms_common::geo::GeoPoint;

use crate::Hotspots;
use crate::errors::*;

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_HEAT_JS: &str = "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";

const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// the color detection markers are drawn in
pub const DETECTION_COLOR: &str = "red";
/// detection marker radius in display pixels
pub const DETECTION_RADIUS: u32 = 3;

pub const DEFAULT_ZOOM: u32 = 6;

/* #region map model ******************************************************************************************/

#[derive(Debug,Clone)]
pub enum MarkerKind {
    /// fixed radius circle, stroked and filled in the given color
    Circle { radius: u32, color: &'static str },
    /// standard pin marker - Leaflet renders these in its default blue, which keeps them
    /// distinguishable from Circle detection markers
    Pin
}

#[derive(Debug,Clone)]
pub struct MapMarker {
    pub pos: GeoPoint,
    pub kind: MarkerKind,
    pub popup: String
}

impl MapMarker {
    pub fn circle (pos: GeoPoint, popup: String) -> Self {
        MapMarker { pos, kind: MarkerKind::Circle { radius: DETECTION_RADIUS, color: DETECTION_COLOR }, popup }
    }
    pub fn pin (pos: GeoPoint, popup: String) -> Self {
        MapMarker { pos, kind: MarkerKind::Pin, popup }
    }
}

/// a single caller-specified point rendered distinctly from the data driven markers.
/// Only takes effect if the caller provided both the coordinates and the popup label
#[derive(Debug,Clone)]
pub struct Highlight {
    pub pos: GeoPoint,
    pub label: String
}

impl Highlight {
    pub fn from_options (coords: &Option<String>, label: &Option<String>) -> Result<Option<Highlight>> {
        match (coords, label) {
            (Some(coords), Some(label)) => {
                Ok( Some( Highlight { pos: parse_highlight_coords(coords)?, label: label.clone() }))
            }
            _ => Ok(None)
        }
    }
}

/// parse a "lat,lon" highlight spec
pub fn parse_highlight_coords (s: &str) -> Result<GeoPoint> {
    let mut it = s.split(',');
    if let (Some(lat),Some(lon),None) = (it.next(), it.next(), it.next()) {
        let lat: f64 = lat.trim().parse().map_err( |_| render_error( format!("not a highlight latitude: '{lat}'")))?;
        let lon: f64 = lon.trim().parse().map_err( |_| render_error( format!("not a highlight longitude: '{lon}'")))?;
        Ok( GeoPoint::from_lon_lat_degrees( lon, lat))
    } else {
        Err( render_error( format!("not a 'lat,lon' highlight spec: '{s}'")))
    }
}

/* #endregion map model */

/* #region map rendering **************************************************************************************/

/// what a concrete map backend has to provide: accumulate density layer samples, accumulate
/// markers, and serialize the composed map into a single self contained document
pub trait MapRenderer {
    fn add_density_layer (&mut self, samples: Vec<GeoPoint>);
    fn add_marker (&mut self, marker: MapMarker);
    fn to_html (&self) -> String;
}

/// Leaflet + Leaflet.heat backed MapRenderer. Layers are emitted in insertion order with
/// density layers before markers, so markers added later draw on top
pub struct LeafletMap {
    center: GeoPoint,
    zoom: u32,
    density_layers: Vec<Vec<GeoPoint>>,
    markers: Vec<MapMarker>
}

impl LeafletMap {
    pub fn new (center: GeoPoint, zoom: u32) -> Self {
        LeafletMap { center, zoom, density_layers: Vec::new(), markers: Vec::new() }
    }

    pub fn center (&self) -> GeoPoint { self.center }

    fn append_density_layer_js (&self, buf: &mut String, samples: &[GeoPoint]) {
        write!( buf, "L.heatLayer([");
        for (i,p) in samples.iter().enumerate() {
            if i > 0 { write!( buf, ","); }
            write!( buf, "[{},{}]", p.latitude().degrees(), p.longitude().degrees());
        }
        write!( buf, "]).addTo(map);\n");
    }

    fn append_marker_js (&self, buf: &mut String, marker: &MapMarker) {
        let lat = marker.pos.latitude().degrees();
        let lon = marker.pos.longitude().degrees();
        match marker.kind {
            MarkerKind::Circle { radius, color } => {
                write!( buf, "L.circleMarker([{},{}], {{radius: {}, color: '{}', fill: true, fillColor: '{}'}})",
                        lat, lon, radius, color, color);
            }
            MarkerKind::Pin => {
                write!( buf, "L.marker([{},{}])", lat, lon);
            }
        }
        write!( buf, ".addTo(map).bindPopup('{}');\n", escape_js( &marker.popup));
    }
}

impl MapRenderer for LeafletMap {
    fn add_density_layer (&mut self, samples: Vec<GeoPoint>) {
        self.density_layers.push( samples);
    }

    fn add_marker (&mut self, marker: MapMarker) {
        self.markers.push( marker);
    }

    /// render HTML document. Our documents are simple enough that we don't need an
    /// intermediate doc model lib - we just write the fragments in order
    fn to_html (&self) -> String {
        let mut buf = String::with_capacity( 4096 + 128 * self.markers.len());

        write!( buf, "<!DOCTYPE html>\n");
        write!( buf, "<html>\n");
        write!( buf, "<head>\n");
        write!( buf, "<meta charset=\"utf-8\"/>\n");
        write!( buf, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>\n");
        write!( buf, "<title>FIRMS wildfire detections</title>\n");
        write!( buf, "<link rel=\"stylesheet\" type=\"text/css\" href=\"{LEAFLET_CSS}\"/>\n");
        write!( buf, "<script src=\"{LEAFLET_JS}\"></script>\n");
        write!( buf, "<script src=\"{LEAFLET_HEAT_JS}\"></script>\n");
        write!( buf, "<style>html, body, #map {{ height: 100%; margin: 0; }}</style>\n");
        write!( buf, "</head>\n");
        write!( buf, "<body>\n");
        write!( buf, "<div id=\"map\"></div>\n");
        write!( buf, "<script>\n");

        write!( buf, "var map = L.map('map').setView([{},{}], {});\n",
                self.center.latitude().degrees(), self.center.longitude().degrees(), self.zoom);
        write!( buf, "L.tileLayer('{}', {{maxZoom: 19, attribution: '{}'}}).addTo(map);\n",
                TILE_URL, TILE_ATTRIBUTION);

        for samples in &self.density_layers {
            self.append_density_layer_js( &mut buf, samples);
        }
        for marker in &self.markers {
            self.append_marker_js( &mut buf, marker);
        }

        write!( buf, "</script>\n");
        write!( buf, "</body>\n");
        write!( buf, "</html>\n");

        buf
    }
}

/// escape text for embedding in a single quoted JS string literal. Popups are HTML so
/// newlines in popup text turn into line breaks
fn escape_js (s: &str) -> String {
    let mut escaped = String::with_capacity( s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("<br>"),
            '\r' => {}
            c => escaped.push(c)
        }
    }
    escaped
}

/* #endregion map rendering */

/* #region hotspot map composition ****************************************************************************/

/// compose the hotspot map: view centered on the hotspot mean, one uniformly weighted
/// density sample and one circle marker per hotspot, and an optional highlight pin on top.
/// An empty hotspot set has no center to view and is a precondition violation
pub fn build_hotspot_map (hotspots: &Hotspots, highlight: Option<Highlight>) -> Result<LeafletMap> {
    let center = hotspots.mean_center().ok_or_else( || render_error("no hotspots to center the map on"))?;
    let mut map = LeafletMap::new( center, DEFAULT_ZOOM);

    map.add_density_layer( hotspots.iter().map( |h| h.position()).collect());

    for h in hotspots.iter() {
        let popup = format!("Brightness: {}\nDate: {}", h.brightness_kelvin(), h.acq_date);
        map.add_marker( MapMarker::circle( h.position(), popup));
    }

    if let Some(hl) = highlight {
        map.add_marker( MapMarker::pin( hl.pos, hl.label));
    }

    Ok(map)
}

/// serialize the composed map into a standalone document at path, overwriting any
/// previous artifact
pub fn save_map (map: &dyn MapRenderer, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    set_filepath_contents( path, map.to_html().as_bytes())?;
    Ok( path.to_path_buf())
}

/* #endregion hotspot map composition */
