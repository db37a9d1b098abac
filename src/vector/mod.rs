//! OGR vector data: geometries, layers and features.
//!
//! ## Writing and reading back
//!
//! ```rust, no_run
//! use gdal_glue::cpl::CslStringList;
//! use gdal_glue::vector::{Geometry, OGRwkbGeometryType};
//! use gdal_glue::DriverManager;
//!
//! let driver = DriverManager::get_driver_by_name("Memory").unwrap();
//! let mut dataset = driver.create_vector_only("").unwrap();
//! let mut layer = dataset
//!     .create_layer("points", None, OGRwkbGeometryType::wkbPoint, &CslStringList::new())
//!     .unwrap();
//! layer.create_feature(Geometry::from_wkt("POINT (1 2)").unwrap()).unwrap();
//! for feature in layer.features() {
//!     println!("{:?}", feature.geometry());
//! }
//! ```

mod envelope;
mod feature;
mod geometry;
mod layer;

pub use envelope::{Envelope, Envelope3D};
pub use feature::{Feature, FieldValue};
pub use geometry::{Geometry, GeometryRef, WkbByteOrder};
pub use layer::{FeatureIterator, Layer};

pub use gdal_glue_sys::{OGRFieldType, OGRwkbGeometryType};

#[cfg(test)]
mod tests;
