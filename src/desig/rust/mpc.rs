//! Interface for Minor Planet Center (MPC) designations
//!
//!
use desig_core::desigs::{Category, pack, unpack};
use pyo3::prelude::*;

use crate::utils::MaybeVec;

/// Pack an unpacked MPC designation into the packed format.
///
/// Designations which match no known format are returned unchanged.
///
/// Parameters
/// ----------
/// desig :
///     Unpacked designation, or a list of them.
/// category :
///     Optional category code which the designations must belong to, one of
///     ``0`` provisional, ``1`` numbered, ``2`` provisional comet, ``3`` numbered
///     comet, ``4`` satellite, ``5`` permanent satellite, ``6`` other.
#[pyfunction]
#[pyo3(name = "pack_designation", signature = (desig, category=None))]
pub fn pack_designation_py(
    desig: MaybeVec<String>,
    category: Option<i8>,
) -> PyResult<MaybeVec<String>> {
    let category = category.map(Category::try_from).transpose()?;
    desig.par_try_map(|text| Ok(pack(&text, category)?))
}

/// Unpack a packed MPC designation.
///
/// Returns the unpacked designation along with its category code, ``-1`` is
/// returned for designations which match no known format.
///
/// Parameters
/// ----------
/// packed :
///     Packed designation, or a list of them.
#[pyfunction]
#[pyo3(name = "unpack_designation")]
pub fn unpack_designation_py(packed: MaybeVec<String>) -> PyResult<MaybeVec<(String, i8)>> {
    packed.par_try_map(|text| {
        let (unpacked, category) = unpack(&text)?;
        Ok((unpacked, category.code()))
    })
}
