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

 use thiserror::Error;

 pub type Result<T> = std::result::Result<T, FirmsHeatmapError>;

 #[derive(Error, Debug)]
 pub enum FirmsHeatmapError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("serde error {0}")]
    SerdeError( #[from] serde_json::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("Reqwest error {0}")]
    ReqwestError( #[from] reqwest::Error),

    #[error("config error {0}")]
    ConfigError( String ),

    #[error("FIRMS request failed: {0}")]
    FetchError( String ),

    #[error("CSV parse error {0}")]
    ParseError( String ),

    #[error("render error {0}")]
    RenderError( String ),

 }

 pub fn config_error (msg: impl ToString)->FirmsHeatmapError {
    FirmsHeatmapError::ConfigError(msg.to_string())
 }

 pub fn fetch_error (msg: impl ToString)->FirmsHeatmapError {
    FirmsHeatmapError::FetchError(msg.to_string())
 }

 pub fn parse_error (msg: impl ToString)->FirmsHeatmapError {
    FirmsHeatmapError::ParseError(msg.to_string())
 }

 pub fn render_error (msg: impl ToString)->FirmsHeatmapError {
    FirmsHeatmapError::RenderError(msg.to_string())
 }
