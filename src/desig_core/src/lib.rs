//! # Desig Core
//! Packing and unpacking of the designations used by the Minor Planet Center (MPC),
//! along with the geometry of the observing sites found in MPC astrometry.
//!
//! This crate is left as a stand alone Rust crate, completely independent of the
//! Python wrappers, so that wrappers may be written for other languages later.
//!

pub mod base62;
pub mod desigs;
pub mod errors;
pub mod observers;

/// Common useful imports
pub mod prelude {
    pub use crate::desigs::{Category, Desig, pack, unpack};
    pub use crate::errors::{DesigResult, Error};
    pub use crate::observers::{ObsCode, find_obs_code, lat_alt_to_parallax, parallax_to_lat_alt};
}
