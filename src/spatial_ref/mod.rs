//! Spatial reference systems and coordinate transformations.
//!
//! See: [OGR Spatial Reference Tutorial](https://gdal.org/tutorials/osr_api_tut.html)

mod srs;
mod transform;

#[cfg(major_ge_3)]
pub use srs::AxisMappingStrategy;
pub use srs::SpatialRef;
pub use transform::CoordTransform;

#[cfg(test)]
mod tests;
