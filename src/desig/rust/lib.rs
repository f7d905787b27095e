//! Python bindings to `desig_core`.
//!
//! Designations are packed and unpacked in parallel when lists are provided.
use pyo3::prelude::*;

pub mod mpc;
pub mod obs;
pub mod utils;

/// Python module for packing MPC designations.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<obs::PyObsCode>()?;

    m.add_function(wrap_pyfunction!(mpc::pack_designation_py, m)?)?;
    m.add_function(wrap_pyfunction!(mpc::unpack_designation_py, m)?)?;

    m.add_function(wrap_pyfunction!(obs::obs_code_info_py, m)?)?;
    m.add_function(wrap_pyfunction!(obs::lat_alt_to_parallax_py, m)?)?;
    m.add_function(wrap_pyfunction!(obs::parallax_to_lat_alt_py, m)?)?;

    Ok(())
}
