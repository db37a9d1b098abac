//! Hand-written declarations for the part of the GDAL/OGR/OSR C API used by
//! `gdal-glue`.
//!
//! Enumerations follow the "constified module" layout: each C enum is a module
//! holding a `Type` alias and one constant per enumerator, so values coming
//! back from GDAL never have to be validated before they can be stored.
//!
//! Declarations whose signature changed between GDAL releases are gated on the
//! `major_*`/`minor_*` cfgs emitted by `build.rs`.
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]

extern crate libc;

// cpl modules
pub mod cpl_conv;
pub mod cpl_error;
pub mod cpl_string;
pub mod cpl_vsi;

// gdal modules
pub mod gdal;
pub mod gdal_alg;
pub mod gdal_enums;
pub mod gdal_utils;

// OGR modules
pub mod ogr;
pub mod ogr_enums;
pub mod ogr_structs;

// OGR Spatial Reference module
pub mod osr;

pub use cpl_conv::*;
pub use cpl_error::*;
pub use cpl_string::*;
pub use cpl_vsi::*;
pub use gdal::*;
pub use gdal_alg::*;
pub use gdal_enums::*;
pub use gdal_utils::*;
pub use ogr::*;
pub use ogr_enums::*;
pub use ogr_structs::*;
pub use osr::*;

/// `GIntBig` from `cpl_port.h`.
pub type GIntBig = i64;
/// `GUIntBig` from `cpl_port.h`.
pub type GUIntBig = u64;
/// `GUInt32` from `cpl_port.h`.
pub type GUInt32 = libc::c_uint;
/// `GByte` from `cpl_port.h`.
pub type GByte = libc::c_uchar;

pub const C_FALSE: libc::c_int = 0;
pub const C_TRUE: libc::c_int = 1;
