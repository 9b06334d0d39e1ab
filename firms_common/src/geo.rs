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

/// this module provides the surface geometries used for area queries and map composition.
/// We build on the [geo](https://docs.rs/geo/latest/geo/index.html) crate and employ the Rust
/// new type pattern to add latitude/longitude value semantics on top of its cartesian types

use std::fmt::{self,Debug,Display};
use std::str::FromStr;

use geo::{Point,Rect};

use crate::define_error;
use crate::angle::{normalize_180,normalize_90,Latitude,Longitude};

define_error!{ pub GeoError =
    ParseError(String) : "parse error: {0}"
}

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64 (x = longitude, y = latitude)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat (lon: Longitude, lat: Latitude) -> Self {
        GeoPoint( Point::new( lon.degrees(), lat.degrees()))
    }
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn longitude (&self) -> Longitude { Longitude::from_degrees( self.0.x()) }
    pub fn latitude (&self) -> Latitude { Latitude::from_degrees( self.0.y()) }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(),self.0.y())
    }
}

/* #endregion GeoPoint */

/* #region GeoRect ***********************************************************************************************/

/// a west/south/east/north rectangle on the ellipsoid surface, as used by area queries.
/// Note that from_wsen does not check w < e or s < n ordering
#[derive(Debug,Clone)]
pub struct GeoRect(Rect);

impl GeoRect {
    pub fn from_wsen (west: Longitude, south: Latitude, east: Longitude, north: Latitude) -> Self {
        GeoRect( Rect::new( Point::new( west.degrees(), south.degrees()), Point::new( east.degrees(), north.degrees()) ))
    }

    pub fn west (&self) -> Longitude { Longitude::from_degrees( self.0.min().x) }
    pub fn south (&self) -> Latitude { Latitude::from_degrees( self.0.min().y) }
    pub fn east (&self) -> Longitude { Longitude::from_degrees( self.0.max().x) }
    pub fn north (&self) -> Latitude { Latitude::from_degrees( self.0.max().y) }

    pub fn rect<'a> (&'a self) -> &'a Rect { &self.0 }

    /// the "w,s,e,n" form used as a query path segment
    pub fn to_wsen_string (&self) -> String {
        format!("{},{},{},{}", self.0.min().x, self.0.min().y, self.0.max().x, self.0.max().y)
    }
}

/// parse a "lon_min,lat_min,lon_max,lat_max" rect spec
impl FromStr for GeoRect {
    type Err = GeoError;

    fn from_str (s: &str) -> Result<Self,GeoError> {
        let comps: Vec<&str> = s.split(',').map( |c| c.trim()).collect();
        if comps.len() != 4 {
            return Err( GeoError::ParseError( format!("not a 'w,s,e,n' rect spec: '{s}'")))
        }

        let mut degs = [0.0f64; 4];
        for (i,c) in comps.iter().enumerate() {
            degs[i] = c.parse().map_err( |_| GeoError::ParseError( format!("not a number: '{c}'")))?;
        }

        Ok( GeoRect::from_wsen(
            Longitude::from_degrees(degs[0]), Latitude::from_degrees(degs[1]),
            Longitude::from_degrees(degs[2]), Latitude::from_degrees(degs[3])
        ))
    }
}

impl fmt::Display for GeoRect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wsen_string())
    }
}

/* #endregion GeoRect */
