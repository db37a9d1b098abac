use std::ffi::CString;
use std::marker::PhantomData;

use gdal_glue_sys::{self, CPLErr, GDALAccess, GDALMajorObjectH, GDALRWFlag, GDALRasterBandH};
use libc::{c_double, c_int, c_void};

#[cfg(feature = "ndarray")]
use ndarray::Array2;

use crate::cpl::CslStringList;
use crate::dataset::Dataset;
use crate::errors::*;
use crate::gdal_major_object::MajorObject;
use crate::metadata::Metadata;
use crate::progress::Progress;
use crate::raster::{Buffer, ColorInterpretation, GDALDataType, GdalType};
use crate::utils::{_cpl_result, _last_cpl_err, _string, _string_array, _to_c_int};

fn offset_to_c_int(value: isize, what: &str) -> Result<c_int> {
    c_int::try_from(value)
        .map_err(|_| GdalError::BadArgument(format!("{what} {value} is out of range")))
}

/// Summary statistics of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsAll {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// A single band of a dataset.
///
/// The band borrows the dataset that owns it, so it cannot outlive it.
#[derive(Debug)]
pub struct RasterBand<'a> {
    c_rasterband: GDALRasterBandH,
    phantom: PhantomData<&'a Dataset>,
}

impl<'a> RasterBand<'a> {
    /// # Safety
    /// `c_rasterband` must belong to `dataset`.
    pub unsafe fn from_c_rasterband(_dataset: &'a Dataset, c_rasterband: GDALRasterBandH) -> Self {
        RasterBand {
            c_rasterband,
            phantom: PhantomData,
        }
    }

    /// Bands reached through another band (overviews, masks) share its dataset.
    fn sibling(&self, c_rasterband: GDALRasterBandH) -> RasterBand<'a> {
        RasterBand {
            c_rasterband,
            phantom: PhantomData,
        }
    }

    /// # Safety
    /// The handle is only valid while the owning dataset is open.
    pub unsafe fn c_rasterband(&self) -> GDALRasterBandH {
        self.c_rasterband
    }

    /// `(columns, rows)`, which may differ from the dataset size for overviews.
    pub fn size(&self) -> (usize, usize) {
        let size_x = unsafe { gdal_glue_sys::GDALGetRasterBandXSize(self.c_rasterband) };
        let size_y = unsafe { gdal_glue_sys::GDALGetRasterBandYSize(self.c_rasterband) };
        (size_x as usize, size_y as usize)
    }

    /// Natural block size of the band.
    pub fn block_size(&self) -> (usize, usize) {
        let mut size_x = 0;
        let mut size_y = 0;
        unsafe { gdal_glue_sys::GDALGetBlockSize(self.c_rasterband, &mut size_x, &mut size_y) };
        (size_x as usize, size_y as usize)
    }

    pub fn band_type(&self) -> GDALDataType::Type {
        unsafe { gdal_glue_sys::GDALGetRasterDataType(self.c_rasterband) }
    }

    /// 1-based index within the dataset, 0 for bands outside one (masks, overviews).
    pub fn band_number(&self) -> usize {
        (unsafe { gdal_glue_sys::GDALGetBandNumber(self.c_rasterband) }) as usize
    }

    pub fn access(&self) -> GDALAccess::Type {
        unsafe { gdal_glue_sys::GDALGetRasterAccess(self.c_rasterband) }
    }

    fn raster_io(
        &self,
        rw_flag: GDALRWFlag::Type,
        window: (isize, isize),
        window_size: (usize, usize),
        size: (usize, usize),
        data: *mut c_void,
        data_type: GDALDataType::Type,
    ) -> Result<()> {
        let rv = unsafe {
            gdal_glue_sys::GDALRasterIO(
                self.c_rasterband,
                rw_flag,
                offset_to_c_int(window.0, "window x offset")?,
                offset_to_c_int(window.1, "window y offset")?,
                _to_c_int(window_size.0, "window width")?,
                _to_c_int(window_size.1, "window height")?,
                data,
                _to_c_int(size.0, "buffer width")?,
                _to_c_int(size.1, "buffer height")?,
                data_type,
                0,
                0,
            )
        };
        _cpl_result(rv)
    }

    /// Reads the window at `window` of `window_size` pixels into `buffer`,
    /// resampled to `size`.
    ///
    /// `buffer` must hold exactly `size.0 * size.1` values.
    pub fn read_into_slice<T: Copy + GdalType>(
        &self,
        window: (isize, isize),
        window_size: (usize, usize),
        size: (usize, usize),
        buffer: &mut [T],
    ) -> Result<()> {
        if size.0.checked_mul(size.1) != Some(buffer.len()) {
            return Err(GdalError::BadArgument(format!(
                "buffer of {} values cannot hold {size:?} pixels",
                buffer.len()
            )));
        }
        self.raster_io(
            GDALRWFlag::GF_Read,
            window,
            window_size,
            size,
            buffer.as_mut_ptr() as *mut c_void,
            T::gdal_type(),
        )
    }

    /// Like [`RasterBand::read_into_slice`], into a new [`Buffer`].
    pub fn read_as<T: Copy + GdalType + Default>(
        &self,
        window: (isize, isize),
        window_size: (usize, usize),
        size: (usize, usize),
    ) -> Result<Buffer<T>> {
        let pixels = size
            .0
            .checked_mul(size.1)
            .ok_or_else(|| GdalError::BadArgument(format!("buffer size {size:?} overflows")))?;
        let mut data = vec![T::default(); pixels];
        self.read_into_slice(window, window_size, size, &mut data)?;
        Ok(Buffer { size, data })
    }

    /// The whole band at full resolution.
    pub fn read_band_as<T: Copy + GdalType + Default>(&self) -> Result<Buffer<T>> {
        let size = self.size();
        self.read_as::<T>((0, 0), size, size)
    }

    /// Like [`RasterBand::read_as`]; the array shape is `(rows, columns)`.
    #[cfg(feature = "ndarray")]
    pub fn read_as_array<T: Copy + GdalType + Default>(
        &self,
        window: (isize, isize),
        window_size: (usize, usize),
        array_size: (usize, usize),
    ) -> Result<Array2<T>> {
        self.read_as::<T>(window, window_size, array_size)?.to_array()
    }

    fn check_block_type<T: GdalType>(&self) -> Result<()> {
        if T::gdal_type() != self.band_type() {
            return Err(GdalError::BadArgument(format!(
                "block of {} does not match band type {}",
                T::datatype(),
                crate::raster::GdalDataType::from(self.band_type())
            )));
        }
        Ok(())
    }

    /// Reads the block at `(block_x, block_y)` in block units.
    ///
    /// Blocks are read in the band's own type, so `T` must match [`RasterBand::band_type`].
    /// Edge blocks are padded to the full block size.
    pub fn read_block<T: Copy + GdalType + Default>(
        &self,
        block_index: (usize, usize),
    ) -> Result<Buffer<T>> {
        self.check_block_type::<T>()?;
        let size = self.block_size();
        let mut data = vec![T::default(); size.0 * size.1];
        let rv = unsafe {
            gdal_glue_sys::GDALReadBlock(
                self.c_rasterband,
                _to_c_int(block_index.0, "block x index")?,
                _to_c_int(block_index.1, "block y index")?,
                data.as_mut_ptr() as *mut c_void,
            )
        };
        _cpl_result(rv)?;
        Ok(Buffer { size, data })
    }

    /// Writes `buffer` into the window at `window` of `window_size` pixels.
    pub fn write<T: GdalType + Copy>(
        &mut self,
        window: (isize, isize),
        window_size: (usize, usize),
        buffer: &Buffer<T>,
    ) -> Result<()> {
        if buffer.size.0.checked_mul(buffer.size.1) != Some(buffer.data.len()) {
            return Err(GdalError::BadArgument(format!(
                "buffer size {:?} does not match {} values",
                buffer.size,
                buffer.data.len()
            )));
        }
        // GF_Write only reads from the buffer
        self.raster_io(
            GDALRWFlag::GF_Write,
            window,
            window_size,
            buffer.size,
            buffer.data.as_ptr() as *mut c_void,
            T::gdal_type(),
        )
    }

    /// Writes a whole block, which must have the band's type and block size.
    pub fn write_block<T: GdalType + Copy>(
        &mut self,
        block_index: (usize, usize),
        block: &mut Buffer<T>,
    ) -> Result<()> {
        self.check_block_type::<T>()?;
        let size = self.block_size();
        if block.size != size || block.data.len() != size.0 * size.1 {
            return Err(GdalError::BadArgument(format!(
                "block of size {:?} does not match the band block size {size:?}",
                block.size
            )));
        }
        let rv = unsafe {
            gdal_glue_sys::GDALWriteBlock(
                self.c_rasterband,
                _to_c_int(block_index.0, "block x index")?,
                _to_c_int(block_index.1, "block y index")?,
                block.data.as_mut_ptr() as *mut c_void,
            )
        };
        _cpl_result(rv)
    }

    fn optional_value(
        &self,
        getter: unsafe extern "C" fn(GDALRasterBandH, *mut c_int) -> c_double,
    ) -> Option<f64> {
        let mut pb_success = 1;
        let value = unsafe { getter(self.c_rasterband, &mut pb_success) };
        if pb_success != 0 {
            return Some(value);
        }
        None
    }

    pub fn no_data_value(&self) -> Option<f64> {
        self.optional_value(gdal_glue_sys::GDALGetRasterNoDataValue)
    }

    /// `None` removes the nodata value.
    pub fn set_no_data_value(&mut self, no_data: Option<f64>) -> Result<()> {
        let rv = match no_data {
            Some(value) => unsafe {
                gdal_glue_sys::GDALSetRasterNoDataValue(self.c_rasterband, value)
            },
            None => unsafe { gdal_glue_sys::GDALDeleteRasterNoDataValue(self.c_rasterband) },
        };
        _cpl_result(rv)
    }

    pub fn scale(&self) -> Option<f64> {
        self.optional_value(gdal_glue_sys::GDALGetRasterScale)
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::GDALSetRasterScale(self.c_rasterband, scale) };
        _cpl_result(rv)
    }

    pub fn offset(&self) -> Option<f64> {
        self.optional_value(gdal_glue_sys::GDALGetRasterOffset)
    }

    pub fn set_offset(&mut self, offset: f64) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::GDALSetRasterOffset(self.c_rasterband, offset) };
        _cpl_result(rv)
    }

    /// Unit of the pixel values, `""` when unknown.
    pub fn unit_type(&self) -> String {
        _string(unsafe { gdal_glue_sys::GDALGetRasterUnitType(self.c_rasterband) })
    }

    pub fn set_unit_type(&mut self, unit_type: &str) -> Result<()> {
        let c_unit_type = CString::new(unit_type)?;
        let rv = unsafe {
            gdal_glue_sys::GDALSetRasterUnitType(self.c_rasterband, c_unit_type.as_ptr())
        };
        _cpl_result(rv)
    }

    /// Minimum from the band metadata, `None` if the driver does not know it.
    pub fn minimum(&self) -> Option<f64> {
        self.optional_value(gdal_glue_sys::GDALGetRasterMinimum)
    }

    pub fn maximum(&self) -> Option<f64> {
        self.optional_value(gdal_glue_sys::GDALGetRasterMaximum)
    }

    /// Scans the band for `(min, max)`, sampling when `approx_ok`.
    pub fn compute_raster_min_max(&self, approx_ok: bool) -> Result<(f64, f64)> {
        let mut min_max = [0.0; 2];
        unsafe {
            gdal_glue_sys::CPLErrorReset();
            gdal_glue_sys::GDALComputeRasterMinMax(
                self.c_rasterband,
                approx_ok as c_int,
                min_max.as_mut_ptr(),
            );
        }
        let class = unsafe { gdal_glue_sys::CPLGetLastErrorType() };
        if class == CPLErr::CE_Failure || class == CPLErr::CE_Fatal {
            return Err(_last_cpl_err(class));
        }
        Ok((min_max[0], min_max[1]))
    }

    /// Stored statistics. With `force` they are computed when missing,
    /// otherwise `None` is returned for them.
    pub fn get_statistics(&self, force: bool, approx_ok: bool) -> Result<Option<StatisticsAll>> {
        let mut statistics = StatisticsAll {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            std_dev: 0.0,
        };
        let rv = unsafe {
            gdal_glue_sys::GDALGetRasterStatistics(
                self.c_rasterband,
                approx_ok as c_int,
                force as c_int,
                &mut statistics.min,
                &mut statistics.max,
                &mut statistics.mean,
                &mut statistics.std_dev,
            )
        };
        match rv {
            CPLErr::CE_None => Ok(Some(statistics)),
            CPLErr::CE_Warning => Ok(None),
            _ => Err(_last_cpl_err(rv)),
        }
    }

    /// Computes statistics from the pixel values and stores them on the band.
    pub fn compute_statistics(
        &self,
        approx_ok: bool,
        progress: &mut Progress<'_>,
    ) -> Result<StatisticsAll> {
        let mut statistics = StatisticsAll {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            std_dev: 0.0,
        };
        let (func, data) = progress.as_raw();
        let rv = unsafe {
            gdal_glue_sys::GDALComputeRasterStatistics(
                self.c_rasterband,
                approx_ok as c_int,
                &mut statistics.min,
                &mut statistics.max,
                &mut statistics.mean,
                &mut statistics.std_dev,
                func,
                data,
            )
        };
        _cpl_result(rv)?;
        Ok(statistics)
    }

    pub fn set_statistics(&mut self, statistics: &StatisticsAll) -> Result<()> {
        let rv = unsafe {
            gdal_glue_sys::GDALSetRasterStatistics(
                self.c_rasterband,
                statistics.min,
                statistics.max,
                statistics.mean,
                statistics.std_dev,
            )
        };
        _cpl_result(rv)
    }

    pub fn color_interpretation(&self) -> Result<ColorInterpretation> {
        let c_int = unsafe { gdal_glue_sys::GDALGetRasterColorInterpretation(self.c_rasterband) };
        ColorInterpretation::from_c_int(c_int)
    }

    pub fn set_color_interpretation(&mut self, interpretation: ColorInterpretation) -> Result<()> {
        let rv = unsafe {
            gdal_glue_sys::GDALSetRasterColorInterpretation(
                self.c_rasterband,
                interpretation.c_int(),
            )
        };
        _cpl_result(rv)
    }

    pub fn overview_count(&self) -> usize {
        (unsafe { gdal_glue_sys::GDALGetOverviewCount(self.c_rasterband) }) as usize
    }

    /// The 0-based overview `index`.
    pub fn overview(&self, index: usize) -> Result<RasterBand<'a>> {
        let c_index = _to_c_int(index, "overview index")?;
        let c_band = unsafe { gdal_glue_sys::GDALGetOverview(self.c_rasterband, c_index) };
        if c_band.is_null() {
            return Err(crate::utils::_last_null_pointer_err("GDALGetOverview"));
        }
        Ok(self.sibling(c_band))
    }

    pub fn has_arbitrary_overviews(&self) -> bool {
        (unsafe { gdal_glue_sys::GDALHasArbitraryOverviews(self.c_rasterband) }) != 0
    }

    /// The mask band. Every band has one, possibly derived from nodata or all valid.
    pub fn mask_band(&self) -> Result<RasterBand<'a>> {
        let c_band = unsafe { gdal_glue_sys::GDALGetMaskBand(self.c_rasterband) };
        if c_band.is_null() {
            return Err(crate::utils::_last_null_pointer_err("GDALGetMaskBand"));
        }
        Ok(self.sibling(c_band))
    }

    /// `GMF_*` flags describing the mask band.
    pub fn mask_flags(&self) -> i32 {
        unsafe { gdal_glue_sys::GDALGetMaskFlags(self.c_rasterband) }
    }

    pub fn create_mask_band(&mut self, flags: i32) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::GDALCreateMaskBand(self.c_rasterband, flags) };
        _cpl_result(rv)
    }

    /// Sets every pixel to `value`, plus `imaginary` for complex bands.
    pub fn fill(&mut self, value: f64, imaginary: Option<f64>) -> Result<()> {
        let rv = unsafe {
            gdal_glue_sys::GDALFillRaster(self.c_rasterband, value, imaginary.unwrap_or(0.0))
        };
        _cpl_result(rv)
    }

    pub fn flush_cache(&mut self) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::GDALFlushRasterCache(self.c_rasterband) };
        _cpl_result(rv)
    }

    /// 16 bit checksum of the window at `offset` of `size` pixels.
    pub fn checksum(&self, offset: (usize, usize), size: (usize, usize)) -> Result<u16> {
        let rv = unsafe {
            gdal_glue_sys::CPLErrorReset();
            gdal_glue_sys::GDALChecksumImage(
                self.c_rasterband,
                _to_c_int(offset.0, "x offset")?,
                _to_c_int(offset.1, "y offset")?,
                _to_c_int(size.0, "width")?,
                _to_c_int(size.1, "height")?,
            )
        };
        let class = unsafe { gdal_glue_sys::CPLGetLastErrorType() };
        if rv < 0 || class == CPLErr::CE_Failure {
            return Err(_last_cpl_err(CPLErr::CE_Failure));
        }
        Ok(rv as u16)
    }

    /// Names of the raster classes, indexed by pixel value.
    pub fn category_names(&self) -> Vec<String> {
        _string_array(unsafe { gdal_glue_sys::GDALGetRasterCategoryNames(self.c_rasterband) })
    }

    pub fn set_category_names(&mut self, names: &[&str]) -> Result<()> {
        let names = CslStringList::try_from(names)?;
        let rv =
            unsafe { gdal_glue_sys::GDALSetRasterCategoryNames(self.c_rasterband, names.as_ptr()) };
        _cpl_result(rv)
    }

    /// Copies every pixel into `destination`, which must have the same size.
    pub fn copy_whole_raster(
        &self,
        destination: &mut RasterBand<'_>,
        options: &CslStringList,
        progress: &mut Progress<'_>,
    ) -> Result<()> {
        let (func, data) = progress.as_raw();
        let rv = unsafe {
            gdal_glue_sys::GDALRasterBandCopyWholeRaster(
                self.c_rasterband,
                destination.c_rasterband,
                options.as_ptr(),
                func,
                data,
            )
        };
        _cpl_result(rv)
    }
}

impl MajorObject for RasterBand<'_> {
    unsafe fn gdal_object_ptr(&self) -> GDALMajorObjectH {
        self.c_rasterband
    }
}

impl Metadata for RasterBand<'_> {}
