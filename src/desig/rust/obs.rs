//! Observatory sites and parallax constants.
use desig_core::observers::{ObsCode, find_obs_code, lat_alt_to_parallax, parallax_to_lat_alt};
use pyo3::prelude::*;

/// An observatory from the list of MPC observatory codes.
#[pyclass(frozen, module = "desig", name = "ObsCode")]
#[derive(Debug, Clone)]
pub struct PyObsCode(pub ObsCode);

impl From<ObsCode> for PyObsCode {
    fn from(value: ObsCode) -> Self {
        Self(value)
    }
}

#[pymethods]
impl PyObsCode {
    /// Observatory code.
    #[getter]
    pub fn code(&self) -> String {
        self.0.code.clone()
    }

    /// Name of the observatory.
    #[getter]
    pub fn name(&self) -> String {
        self.0.name.clone()
    }

    /// East longitude in degrees, between -180 and 180.
    #[getter]
    pub fn lon(&self) -> f64 {
        self.0.lon
    }

    /// Geodetic latitude in degrees.
    #[getter]
    pub fn lat(&self) -> f64 {
        self.0.lat
    }

    /// Altitude above the ellipsoid in meters.
    #[getter]
    pub fn altitude(&self) -> f64 {
        self.0.altitude
    }

    /// Parallax constants, ``(rho_cos_phi, rho_sin_phi)``.
    #[getter]
    pub fn parallax(&self) -> (f64, f64) {
        (self.0.rho_cos_phi, self.0.rho_sin_phi)
    }

    /// Body fixed position in units of the Earth's equatorial radius.
    #[getter]
    pub fn body_fixed_position(&self) -> [f64; 3] {
        self.0.body_fixed_position().into()
    }

    /// Distance in km and bearing in degrees to another observatory.
    pub fn distance_and_bearing(&self, other: &Self) -> (f64, f64) {
        self.0.distance_and_bearing(&other.0)
    }

    fn __repr__(&self) -> String {
        format!(
            "ObsCode(code={:?}, name={:?}, lon={}, lat={}, altitude={})",
            self.0.code, self.0.name, self.0.lon, self.0.lat, self.0.altitude
        )
    }
}

/// Look up an MPC observatory code.
///
/// Returns ``None`` for unknown codes, and for codes without a fixed position on
/// the Earth such as space based telescopes.
///
/// Parameters
/// ----------
/// code :
///     Three character observatory code.
#[pyfunction]
#[pyo3(name = "obs_code_info")]
pub fn obs_code_info_py(code: &str) -> Option<PyObsCode> {
    find_obs_code(code).cloned().map(PyObsCode::from)
}

/// Convert geodetic latitude and altitude into MPC parallax constants.
///
/// Parameters
/// ----------
/// lat :
///     Geodetic latitude in degrees.
/// alt :
///     Altitude above the GRS 80 ellipsoid in meters.
#[pyfunction]
#[pyo3(name = "lat_alt_to_parallax")]
pub fn lat_alt_to_parallax_py(lat: f64, alt: f64) -> (f64, f64) {
    lat_alt_to_parallax(lat.to_radians(), alt)
}

/// Convert MPC parallax constants into geodetic latitude and altitude.
///
/// Returns the latitude in degrees and the altitude in meters.
///
/// Parameters
/// ----------
/// rho_cos_phi :
///     Distance from the rotation axis in units of the equatorial radius.
/// rho_sin_phi :
///     Distance from the equatorial plane in units of the equatorial radius.
#[pyfunction]
#[pyo3(name = "parallax_to_lat_alt")]
pub fn parallax_to_lat_alt_py(rho_cos_phi: f64, rho_sin_phi: f64) -> (f64, f64) {
    let (lat, alt) = parallax_to_lat_alt(rho_cos_phi, rho_sin_phi);
    (lat.to_degrees(), alt)
}
