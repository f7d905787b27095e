//! Parallax constants of observing sites.
//!
//! Positions on the Earth are described by MPC as parallax constants,
//! `rho cos(phi')` and `rho sin(phi')`, where `rho` is the distance from the
//! geocenter in units of the equatorial radius and `phi'` is the geocentric
//! latitude. These are converted to and from geodetic latitude and altitude above
//! the GRS 80 ellipsoid.
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

use nalgebra::{Rotation3, Vector3};

/// Equatorial radius of the Earth in meters.
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// Polar radius of the Earth in meters, GRS 80.
///
/// This is about 0.1 mm smaller than the WGS 84 polar radius.
pub const EARTH_MINOR_AXIS: f64 = 6_356_752.314_140_347;

/// Iterations used when solving for the geodetic latitude.
const MAX_ITERATIONS: usize = 20;

/// Convert geodetic latitude and altitude into parallax constants.
///
/// # Arguments
/// * `lat` - Geodetic latitude in radians.
/// * `alt` - Altitude above the ellipsoid in meters.
///
/// Returns `(rho_cos_phi, rho_sin_phi)` in units of the equatorial radius.
#[must_use]
pub fn lat_alt_to_parallax(lat: f64, alt: f64) -> (f64, f64) {
    let axis_ratio = EARTH_MINOR_AXIS / EARTH_MAJOR_AXIS;
    let u = (lat.sin() * axis_ratio).atan2(lat.cos());

    let rho_sin_phi = axis_ratio * u.sin() + (alt / EARTH_MAJOR_AXIS) * lat.sin();
    let rho_cos_phi = u.cos() + (alt / EARTH_MAJOR_AXIS) * lat.cos();
    (rho_cos_phi, rho_sin_phi)
}

/// Convert parallax constants into geodetic latitude and altitude.
///
/// This is the point-to-ellipse problem, solved by fixed point iteration on the
/// latitude. The altitude is computed in a form which remains well defined at the
/// poles.
///
/// Returns `(lat, alt)`, latitude in radians and altitude in meters.
#[must_use]
pub fn parallax_to_lat_alt(rho_cos_phi: f64, rho_sin_phi: f64) -> (f64, f64) {
    let e2 = 1.0 - (EARTH_MINOR_AXIS / EARTH_MAJOR_AXIS).powi(2);
    let p = rho_cos_phi * EARTH_MAJOR_AXIS;
    let z = rho_sin_phi * EARTH_MAJOR_AXIS;

    let prime_vert = |lat: f64| EARTH_MAJOR_AXIS / (1.0 - e2 * lat.sin().powi(2)).sqrt();

    let mut lat = z.atan2(p * (1.0 - e2));
    for _ in 0..MAX_ITERATIONS {
        let next = (z + e2 * prime_vert(lat) * lat.sin()).atan2(p);
        let converged = (next - lat).abs() < 1e-15;
        lat = next;
        if converged {
            break;
        }
    }

    let alt = p * lat.cos() + z * lat.sin()
        - EARTH_MAJOR_AXIS * (1.0 - e2 * lat.sin().powi(2)).sqrt();
    (lat, alt)
}

/// Body fixed position of a site, in units of the Earth's equatorial radius.
///
/// # Arguments
/// * `lon` - East longitude in radians.
/// * `rho_cos_phi` - Distance from the rotation axis.
/// * `rho_sin_phi` - Distance from the equatorial plane.
#[must_use]
pub fn body_fixed_position(lon: f64, rho_cos_phi: f64, rho_sin_phi: f64) -> Vector3<f64> {
    let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), lon);
    rot.transform_vector(&Vector3::new(rho_cos_phi, 0.0, rho_sin_phi))
}

/// Distance and bearing from the first site to the second.
///
/// The Earth is treated as a sphere of radius [`EARTH_MAJOR_AXIS`]. All angles are
/// in radians, longitudes positive to the east.
///
/// Returns `(distance, bearing)`, distance in kilometers and bearing in degrees
/// from north through east, `0..360`.
#[must_use]
pub fn distance_and_bearing(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> (f64, f64) {
    let d_lon = lon2 - lon1;
    let d_lat = lat2 - lat1;

    let hav = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let angle = 2.0 * hav.sqrt().min(1.0).asin();

    let bearing = (d_lon.sin() * lat2.cos())
        .atan2(lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos())
        .to_degrees()
        .rem_euclid(360.0);
    (angle * EARTH_MAJOR_AXIS / 1000.0, bearing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_alt_to_parallax() {
        // Pan-STARRS 1, Haleakala
        let (rho_cos_phi, rho_sin_phi) =
            lat_alt_to_parallax(20.707_233_557_f64.to_radians(), 3067.694);
        assert!((rho_cos_phi - 0.936_241).abs() < 1e-6);
        assert!((rho_sin_phi - 0.351_543).abs() < 1e-6);

        let (rho_cos_phi, rho_sin_phi) = lat_alt_to_parallax(0.0, 0.0);
        assert!((rho_cos_phi - 1.0).abs() < 1e-15);
        assert!(rho_sin_phi.abs() < 1e-15);
    }

    #[test]
    fn test_round_trip() {
        for lat_deg in (-90..=90).step_by(5) {
            for alt in [-400.0, 0.0, 3067.694, 8848.0, 35_786_000.0] {
                let lat = f64::from(lat_deg).to_radians();
                let (rho_cos_phi, rho_sin_phi) = lat_alt_to_parallax(lat, alt);
                let (lat2, alt2) = parallax_to_lat_alt(rho_cos_phi, rho_sin_phi);
                assert!(
                    (lat - lat2).abs() < 1e-10,
                    "lat {lat_deg} alt {alt} -> {}",
                    lat2.to_degrees()
                );
                assert!((alt - alt2).abs() < 1e-3, "lat {lat_deg} alt {alt} -> {alt2}");
            }
        }
    }

    #[test]
    fn test_poles_and_center() {
        let (lat, alt) = parallax_to_lat_alt(0.0, EARTH_MINOR_AXIS / EARTH_MAJOR_AXIS);
        assert!((lat - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(alt.abs() < 1e-6);

        let (lat, alt) = parallax_to_lat_alt(0.0, 0.0);
        assert!(lat.abs() < 1e-12);
        assert!((alt + EARTH_MAJOR_AXIS).abs() < 1e-6);
    }

    #[test]
    fn test_body_fixed() {
        let pos = body_fixed_position(90_f64.to_radians(), 0.5, 0.25);
        assert!((pos - Vector3::new(0.0, 0.5, 0.25)).norm() < 1e-12);
    }

    #[test]
    fn test_distance_and_bearing() {
        let (dist, bearing) = distance_and_bearing(0.0, 0.0, 0.0, 1_f64.to_radians());
        assert!((dist - 111.319).abs() < 1e-3);
        assert!(bearing.abs() < 1e-9);

        let (dist, bearing) = distance_and_bearing(0.0, 0.0, 1_f64.to_radians(), 0.0);
        assert!((dist - 111.319).abs() < 1e-3);
        assert!((bearing - 90.0).abs() < 1e-9);

        let (_, bearing) = distance_and_bearing(0.0, 0.0, -1_f64.to_radians(), 0.0);
        assert!((bearing - 270.0).abs() < 1e-9);

        let (dist, _) = distance_and_bearing(1.0, 0.5, 1.0, 0.5);
        assert!(dist.abs() < 1e-9);
    }
}
