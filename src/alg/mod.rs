//! Raster processing algorithms from `gdal_alg.h`.
//!
//! Every routine reports through a [`Progress`](crate::progress::Progress),
//! and a cancelled run comes back as a [`GdalError::CplError`](crate::errors::GdalError::CplError).

mod grid;
mod raster;

pub use grid::{create_grid, GridAlgorithm, GridAlgorithmKind, GridExtent};
pub use raster::{
    compute_proximity, fill_nodata, fpolygonize, polygonize, sieve_filter, Connectedness,
};
