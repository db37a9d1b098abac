#![crate_name = "gdal_glue"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Rust glue for the [GDAL](https://gdal.org/) C API.
//!
//! Two small adapters carry the boundary work:
//!
//! * [`progress`] lets GDAL call a Rust closure through the
//!   `GDALProgressFunc` convention, and reports cancellation back.
//! * [`wkb`] forwards the three WKB entry points of OGR, compiled against
//!   whichever byte-buffer pointer type the linked GDAL declares.
//!
//! Around them sit safe wrappers for datasets, raster bands, vector layers,
//! spatial references, algorithms and the GDAL utility programs.
//!
//! ## Use
//!
//! ```rust, no_run
//! use gdal_glue::Dataset;
//!
//! let dataset = Dataset::open("fixtures/tinymarble.tif").unwrap();
//! println!("This {} is in '{}' and has {} bands.",
//!          dataset.driver().long_name(),
//!          dataset.projection(),
//!          dataset.raster_count());
//! ```
//!
//! ## Versions
//!
//! The build script reads the GDAL version from `gdal-glue-sys` and sets
//! `major_is_N`, `major_ge_N` and `minor_ge_N` cfgs. [`version`] exposes the
//! build-time and run-time versions.

pub mod alg;
pub mod config;
pub mod cpl;
mod dataset;
mod driver;
pub mod errors;
mod gdal_major_object;
mod metadata;
mod options;
pub mod programs;
pub mod progress;
pub mod raster;
pub mod spatial_ref;
#[cfg(test)]
pub(crate) mod test_utils;
mod utils;
pub mod vector;
pub mod version;
pub mod vsi;
pub mod wkb;

pub use dataset::{Dataset, GeoTransform};
pub use driver::{Driver, DriverManager};
pub use gdal_major_object::MajorObject;
pub use metadata::Metadata;
pub use options::{DatasetOptions, GdalOpenFlags};
