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

//! tool to read wildfire hotspots from a local FIRMS area CSV file

use std::path::PathBuf;

use firms_common::{define_cli, check_cli};
use firms_heatmap::read_hotspots;

define_cli! { ARGS [about="tool to extract hotspots from FIRMS area CSV files"] =
    pathname: String [help="path to csv file"]
}

fn main () {
    check_cli!(ARGS);

    let path = PathBuf::from( &ARGS.pathname);
    if path.is_file() {
        let hs = read_hotspots(&path).unwrap();
        println!("{}", hs.to_json_pretty().unwrap());
    } else {
        println!("file not found")
    }
}
