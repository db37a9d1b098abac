//! Raster bands, pixel types and buffers.

mod buffer;
mod rasterband;
mod types;

pub use buffer::{Buffer, ByteBuffer};
pub use rasterband::{RasterBand, StatisticsAll};
pub use types::{ColorInterpretation, GDALDataType, GdalDataType, GdalType};
