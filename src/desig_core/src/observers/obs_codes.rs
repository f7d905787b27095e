//! Observatory codes used by the MPC
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::str::FromStr;

use itertools::Itertools;
use lazy_static::lazy_static;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::parallax::{body_fixed_position, distance_and_bearing, parallax_to_lat_alt};
use crate::errors::{DesigResult, Error};

/// Observatory information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObsCode {
    /// observatory code
    pub code: String,

    /// east longitude in degrees, between -180 and 180
    pub lon: f64,

    /// geodetic latitude in degrees
    pub lat: f64,

    /// altitude in meters
    pub altitude: f64,

    /// distance from the rotation axis in Earth radii
    pub rho_cos_phi: f64,

    /// distance from the equatorial plane in Earth radii
    pub rho_sin_phi: f64,

    /// name of the observatory
    pub name: String,
}

impl ObsCode {
    /// Body fixed position in units of the Earth's equatorial radius.
    #[must_use]
    pub fn body_fixed_position(&self) -> Vector3<f64> {
        body_fixed_position(self.lon.to_radians(), self.rho_cos_phi, self.rho_sin_phi)
    }

    /// Distance in km and bearing in degrees from this observatory to another.
    #[must_use]
    pub fn distance_and_bearing(&self, other: &Self) -> (f64, f64) {
        distance_and_bearing(
            self.lon.to_radians(),
            self.lat.to_radians(),
            other.lon.to_radians(),
            other.lat.to_radians(),
        )
    }
}

/// Parse a fixed width field of a row, blank fields are errors.
fn field(row: &str, start: usize, end: Option<usize>) -> DesigResult<&str> {
    let text = match end {
        Some(end) => row.get(start..end),
        None => row.get(start..),
    }
    .map(str::trim)
    .unwrap_or_default();
    if text.is_empty() {
        return Err(Error::ValueError(format!(
            "Observatory row is missing columns {start} onward: {row:?}"
        )));
    }
    Ok(text)
}

fn float_field(row: &str, start: usize, end: usize) -> DesigResult<f64> {
    let text = field(row, start, Some(end))?;
    f64::from_str(text)
        .map_err(|_| Error::ValueError(format!("Observatory row has invalid number {text:?}")))
}

impl FromStr for ObsCode {
    type Err = Error;

    /// Load an [`ObsCode`] from a single row of the MPC observatory list.
    ///
    /// Rows of space based and roving observers carry no position and are rejected.
    fn from_str(row: &str) -> DesigResult<Self> {
        let code = field(row, 0, Some(3))?.to_string();
        let mut lon = float_field(row, 3, 13)?;
        let rho_cos_phi = float_field(row, 13, 21)?;
        let rho_sin_phi = float_field(row, 21, 30)?;
        let name = field(row, 30, None)?.to_string();

        if lon > 180.0 {
            lon -= 360.0;
        }
        let (lat, altitude) = parallax_to_lat_alt(rho_cos_phi, rho_sin_phi);

        Ok(Self {
            code,
            lon,
            lat: lat.to_degrees(),
            altitude,
            rho_cos_phi,
            rho_sin_phi,
            name,
        })
    }
}

/// Parse every row of an MPC observatory list.
///
/// Header lines, markup, and rows without a geocentric position are skipped.
#[must_use]
pub fn parse_obs_codes(text: &str) -> Vec<ObsCode> {
    text.lines()
        .filter_map(|row| match ObsCode::from_str(row) {
            Ok(code) => Some(code),
            Err(error) => {
                trace!(%error, "Skipping observatory row.");
                None
            }
        })
        .collect_vec()
}

/// Find an observatory by code in a list.
#[must_use]
pub fn find_in<'a>(codes: &'a [ObsCode], code: &str) -> Option<&'a ObsCode> {
    let code = code.trim();
    codes.iter().find(|obs| obs.code == code)
}

/// Find an observatory by code in the preloaded list, see [`OBS_CODES`].
#[must_use]
pub fn find_obs_code(code: &str) -> Option<&'static ObsCode> {
    find_in(&OBS_CODES, code)
}

const PRELOAD_OBS: &str = include_str!("../../data/mpc_obs.txt");

lazy_static! {
    /// Observatory Codes
    pub static ref OBS_CODES: Vec<ObsCode> = parse_obs_codes(PRELOAD_OBS);
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn obs_codes() {
        let codes = &OBS_CODES;
        assert!(!codes.is_empty());
        assert!(find_obs_code("250").is_none());
        assert!(find_obs_code("C51").is_none());
        assert!(find_obs_code("ZZZ").is_none());
    }

    #[test]
    fn test_greenwich() {
        let obs = find_obs_code("000").unwrap();
        assert_eq!(obs.name, "Greenwich");
        assert!((obs.lat - 51.477).abs() < 0.01);
        assert!(obs.lon.abs() < 1e-12);
        assert!((obs.altitude - 66.0).abs() < 10.0);
    }

    #[test]
    fn test_western_longitude() {
        let obs = find_obs_code(" 568 ").unwrap();
        assert!((obs.lon - (204.5278 - 360.0)).abs() < 1e-9);
        assert!((obs.lat - 19.826).abs() < 0.01);
        assert!((obs.altitude - 4212.0).abs() < 20.0);

        let pos = obs.body_fixed_position();
        assert!((pos.z - obs.rho_sin_phi).abs() < 1e-12);
        assert!((pos.xy().norm() - obs.rho_cos_phi).abs() < 1e-12);
    }

    #[test]
    fn test_distance_between_codes() {
        let maunakea = find_obs_code("568").unwrap();
        let haleakala = find_obs_code("F51").unwrap();
        let (dist, bearing) = maunakea.distance_and_bearing(haleakala);
        assert!(dist > 100.0 && dist < 200.0, "{dist}");
        assert!(bearing > 270.0 && bearing < 360.0, "{bearing}");
    }

    #[test]
    fn test_serde() {
        let obs = find_obs_code("F51").unwrap();
        let json = serde_json::to_string(obs).unwrap();
        let loaded: ObsCode = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.code, obs.code);
        assert_eq!(loaded.name, obs.name);
        assert!((loaded.lat - obs.lat).abs() < 1e-12);
        assert!((loaded.lon - obs.lon).abs() < 1e-12);
        assert!((loaded.altitude - obs.altitude).abs() < 1e-9);
        assert!((loaded.body_fixed_position() - obs.body_fixed_position()).norm() < 1e-12);
    }

    #[test]
    fn test_row_errors() {
        assert!(ObsCode::from_str("").is_err());
        assert!(ObsCode::from_str("250                            Hubble").is_err());
        assert!(ObsCode::from_str("Code  Long.   cos      sin    Name").is_err());
        assert!(ObsCode::from_str("000   0.0000 0.62411 +0.77873").is_err());
    }

    #[test]
    fn test_parse_list() {
        let text = "<pre>\n000   0.0000 0.62411 +0.77873 Greenwich\n</pre>\n";
        let codes = parse_obs_codes(text);
        assert_eq!(codes.len(), 1);
        assert!(find_in(&codes, "000").is_some());
    }
}
