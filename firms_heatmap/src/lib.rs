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

use std::path::{Path,PathBuf};
use std::slice::Iter;

use chrono::NaiveDate;
use csv::Reader;
use serde::{Serialize,Deserialize};
use uom::si::f32::ThermodynamicTemperature;
use uom::si::thermodynamic_temperature::kelvin;

use firms_common::angle::{Latitude,Longitude};
use firms_common::geo::GeoPoint;

pub mod errors;
use errors::*;

pub mod firms;

pub mod heatmap;


/* #region hotspot data structures  ***************************************************************************/

// raw FIRMS hotspot - used for direct parsing of area CSV rows. The field set is the
// intersection of the MODIS and VIIRS area products; all other columns are ignored
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct Hotspot {
    pub latitude: Latitude,
    pub longitude: Longitude,
    #[serde(alias="bright_ti4")] pub brightness: ThermodynamicTemperature,
    pub acq_date: NaiveDate,
}

impl Hotspot {
    pub fn position (&self) -> GeoPoint {
        GeoPoint::from_lon_lat( self.longitude, self.latitude)
    }
    pub fn brightness_kelvin (&self) -> f32 {
        self.brightness.get::<kelvin>()
    }
    pub fn to_json (&self)->Result<String> {
        Ok(serde_json::to_string( &self )?)
    }
}

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct Hotspots {
    hotspots: Vec<Hotspot>
}

impl Hotspots {
    pub fn new (hotspots: Vec<Hotspot>) -> Self {
        Hotspots { hotspots }
    }

    pub fn len (&self)->usize { self.hotspots.len() }
    pub fn is_empty (&self)->bool { self.hotspots.is_empty() }
    pub fn iter (&self)->Iter<'_,Hotspot> { self.hotspots.iter() }

    /// view center for a map showing this hotspot set: the arithmetic mean of all
    /// latitudes and longitudes. None for an empty set - there is no meaningful center
    pub fn mean_center (&self) -> Option<GeoPoint> {
        if self.hotspots.is_empty() { return None }

        let n = self.hotspots.len() as f64;
        let lat = self.hotspots.iter().map( |h| h.latitude.degrees()).sum::<f64>() / n;
        let lon = self.hotspots.iter().map( |h| h.longitude.degrees()).sum::<f64>() / n;
        Some( GeoPoint::from_lon_lat_degrees( lon, lat))
    }

    pub fn to_json_pretty (&self)->Result<String> {
        Ok(serde_json::to_string_pretty( &self )?)
    }
    pub fn to_json (&self)->Result<String> {
        Ok(serde_json::to_string( &self )?)
    }
}

/* #endregion hotspot data structures */

/* #region hotspot parsing  ***********************************************************************************/

/// read hotspots from a local FIRMS area CSV file, in file order. Column names are taken
/// from the header row; columns the downstream stages rely on are checked up front so a
/// truncated or unrelated CSV fails here and not with an obscure per-record error later
pub fn read_hotspots (path: impl AsRef<Path>) -> Result<Hotspots> {
    let mut rdr = Reader::from_path( path.as_ref())?;
    check_columns( rdr.headers()?)?;

    let mut hotspots: Vec<Hotspot> = Vec::new();
    for result in rdr.deserialize() {
        let record: Hotspot = result?;
        hotspots.push( record);
    }
    Ok( Hotspots{ hotspots })
}

fn check_columns (headers: &csv::StringRecord) -> Result<()> {
    for col in ["latitude", "longitude", "acq_date"] {
        if !headers.iter().any( |h| h == col) {
            return Err( parse_error( format!("missing column '{col}' in FIRMS csv")))
        }
    }
    // MODIS products report 'brightness', VIIRS products 'bright_ti4'
    if !headers.iter().any( |h| h == "brightness" || h == "bright_ti4") {
        return Err( parse_error("missing column 'brightness' in FIRMS csv"))
    }
    Ok(())
}

/* #endregion hotspot parsing */
