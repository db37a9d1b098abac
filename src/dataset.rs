use std::ffi::{CString, NulError};
use std::path::Path;
use std::ptr;

use gdal_glue_sys::{self, CPLErr, GDALAccess, GDALDatasetH, GDALMajorObjectH, OGRwkbGeometryType};
use libc::{c_double, c_int};

use crate::cpl::CslStringList;
use crate::driver::{Driver, _register_drivers};
use crate::errors::*;
use crate::gdal_major_object::MajorObject;
use crate::metadata::Metadata;
use crate::options::DatasetOptions;
use crate::progress::Progress;
use crate::raster::{GdalType, RasterBand};
#[cfg(major_ge_3)]
use crate::spatial_ref::SpatialRef;
use crate::utils::{
    _cpl_result, _last_cpl_err, _last_null_pointer_err, _path_to_c_string, _string, _to_c_int,
};
use crate::vector::Layer;

/// Affine coefficients mapping pixel/line to georeferenced coordinates.
///
/// `[x_origin, pixel_width, row_rotation, y_origin, column_rotation, pixel_height]`
pub type GeoTransform = [c_double; 6];

/// An open GDAL dataset, closed on drop.
#[derive(Debug)]
pub struct Dataset {
    c_dataset: GDALDatasetH,
}

// A dataset may be used by one thread at a time. VRT datasets are not safe to
// move before GDAL 2.3.
#[cfg(any(all(major_is_2, minor_ge_3), major_ge_3))]
unsafe impl Send for Dataset {}

/// Builds a NULL-terminated `char **` that borrows from `strings`.
///
/// `None` becomes a NULL list rather than an empty one.
fn c_string_vec(strings: Option<&[&str]>) -> std::result::Result<Option<Vec<CString>>, NulError> {
    strings
        .map(|s| s.iter().map(|&s| CString::new(s)).collect())
        .transpose()
}

fn c_ptr_vec(strings: &Option<Vec<CString>>) -> Option<Vec<*const libc::c_char>> {
    strings.as_ref().map(|s| {
        let mut ptrs: Vec<_> = s.iter().map(|s| s.as_ptr()).collect();
        ptrs.push(ptr::null());
        ptrs
    })
}

fn list_ptr(ptrs: &Option<Vec<*const libc::c_char>>) -> *const *const libc::c_char {
    ptrs.as_ref().map_or(ptr::null(), |p| p.as_ptr())
}

impl Dataset {
    /// Returns the wrapped C pointer
    ///
    /// # Safety
    /// The pointer is only valid while `self` is alive.
    pub unsafe fn c_dataset(&self) -> GDALDatasetH {
        self.c_dataset
    }

    /// Creates a new Dataset by wrapping a C pointer
    ///
    /// # Safety
    /// `c_dataset` must be an open dataset that nothing else closes.
    pub unsafe fn from_c_dataset(c_dataset: GDALDatasetH) -> Dataset {
        Dataset { c_dataset }
    }

    /// Opens `path` read-only with whichever driver recognises it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        Self::open_ex(path, DatasetOptions::default())
    }

    pub fn open_ex<P: AsRef<Path>>(path: P, options: DatasetOptions) -> Result<Dataset> {
        _register_drivers();
        let c_filename = _path_to_c_string(path)?;

        // the CStrings must outlive the pointer arrays handed to GDAL
        let c_allowed_drivers = c_string_vec(options.allowed_drivers)?;
        let c_open_options = c_string_vec(options.open_options)?;
        let c_sibling_files = c_string_vec(options.sibling_files)?;
        let c_allowed_drivers_ptrs = c_ptr_vec(&c_allowed_drivers);
        let c_open_options_ptrs = c_ptr_vec(&c_open_options);
        let c_sibling_files_ptrs = c_ptr_vec(&c_sibling_files);

        let c_dataset = unsafe {
            gdal_glue_sys::GDALOpenEx(
                c_filename.as_ptr(),
                options.open_flags.bits(),
                list_ptr(&c_allowed_drivers_ptrs),
                list_ptr(&c_open_options_ptrs),
                list_ptr(&c_sibling_files_ptrs),
            )
        };
        if c_dataset.is_null() {
            return Err(_last_null_pointer_err("GDALOpenEx"));
        }
        Ok(Dataset { c_dataset })
    }

    pub fn raster_size(&self) -> (usize, usize) {
        let size_x = unsafe { gdal_glue_sys::GDALGetRasterXSize(self.c_dataset) } as usize;
        let size_y = unsafe { gdal_glue_sys::GDALGetRasterYSize(self.c_dataset) } as usize;
        (size_x, size_y)
    }

    pub fn raster_count(&self) -> usize {
        (unsafe { gdal_glue_sys::GDALGetRasterCount(self.c_dataset) }) as usize
    }

    /// The band at 1-based `band_index`.
    pub fn rasterband(&self, band_index: usize) -> Result<RasterBand<'_>> {
        let band_index = c_int::try_from(band_index)
            .map_err(|_| GdalError::BadArgument(format!("band index {band_index} is too large")))?;
        unsafe {
            let c_band = gdal_glue_sys::GDALGetRasterBand(self.c_dataset, band_index);
            if c_band.is_null() {
                return Err(_last_null_pointer_err("GDALGetRasterBand"));
            }
            Ok(RasterBand::from_c_rasterband(self, c_band))
        }
    }

    /// Appends a band of type `T`. Only some drivers, such as `MEM`, support this.
    pub fn add_band<T: GdalType>(&mut self, options: &CslStringList) -> Result<()> {
        let rv =
            unsafe { gdal_glue_sys::GDALAddBand(self.c_dataset, T::gdal_type(), options.as_ptr()) };
        _cpl_result(rv)
    }

    pub fn projection(&self) -> String {
        let rv = unsafe { gdal_glue_sys::GDALGetProjectionRef(self.c_dataset) };
        _string(rv)
    }

    pub fn set_projection(&mut self, projection: &str) -> Result<()> {
        let c_projection = CString::new(projection)?;
        let rv = unsafe { gdal_glue_sys::GDALSetProjection(self.c_dataset, c_projection.as_ptr()) };
        _cpl_result(rv)
    }

    #[cfg(major_ge_3)]
    pub fn spatial_ref(&self) -> Result<SpatialRef> {
        let c_srs = unsafe { gdal_glue_sys::GDALGetSpatialRef(self.c_dataset) };
        if c_srs.is_null() {
            return Err(_last_null_pointer_err("GDALGetSpatialRef"));
        }
        unsafe { SpatialRef::from_c_obj(c_srs) }
    }

    #[cfg(major_ge_3)]
    pub fn set_spatial_ref(&mut self, spatial_ref: &SpatialRef) -> Result<()> {
        let rv =
            unsafe { gdal_glue_sys::GDALSetSpatialRef(self.c_dataset, spatial_ref.to_c_hsrs()) };
        _cpl_result(rv)
    }

    pub fn set_geo_transform(&mut self, transformation: &GeoTransform) -> Result<()> {
        let mut transformation = *transformation;
        let rv = unsafe {
            gdal_glue_sys::GDALSetGeoTransform(self.c_dataset, transformation.as_mut_ptr())
        };
        _cpl_result(rv)
    }

    /// Fails when the dataset has no geotransform.
    pub fn geo_transform(&self) -> Result<GeoTransform> {
        let mut transformation = GeoTransform::default();
        let rv = unsafe {
            gdal_glue_sys::GDALGetGeoTransform(self.c_dataset, transformation.as_mut_ptr())
        };
        if rv != CPLErr::CE_None {
            return Err(_last_cpl_err(rv));
        }
        Ok(transformation)
    }

    pub fn gcp_count(&self) -> usize {
        (unsafe { gdal_glue_sys::GDALGetGCPCount(self.c_dataset) }) as usize
    }

    pub fn driver(&self) -> Driver {
        unsafe {
            let c_driver = gdal_glue_sys::GDALGetDatasetDriver(self.c_dataset);
            Driver::from_c_driver(c_driver)
        }
    }

    pub fn access(&self) -> GDALAccess::Type {
        (unsafe { gdal_glue_sys::GDALGetAccess(self.c_dataset) }) as GDALAccess::Type
    }

    /// Writes cached blocks out to the underlying storage.
    pub fn flush_cache(&mut self) {
        unsafe { gdal_glue_sys::GDALFlushCache(self.c_dataset) };
    }

    /// Builds overviews with decimation `factors` for the 1-based `bands`;
    /// all bands when `bands` is empty.
    ///
    /// `resampling` is one of the GDAL names, e.g. `NEAREST` or `AVERAGE`.
    pub fn build_overviews(
        &mut self,
        resampling: &str,
        factors: &[i32],
        bands: &[i32],
        progress: &mut Progress<'_>,
    ) -> Result<()> {
        let c_resampling = CString::new(resampling)?;
        let n_factors = _to_c_int(factors.len(), "overview factor count")?;
        let n_bands = _to_c_int(bands.len(), "band count")?;
        let (func, data) = progress.as_raw();
        let rv = unsafe {
            gdal_glue_sys::GDALBuildOverviews(
                self.c_dataset,
                c_resampling.as_ptr(),
                n_factors,
                factors.as_ptr(),
                n_bands,
                if bands.is_empty() { ptr::null() } else { bands.as_ptr() },
                func,
                data,
            )
        };
        _cpl_result(rv)
    }

    /// Adds a mask band shared by all raster bands. `flags` is a `GMF_*` combination.
    pub fn create_mask_band(&mut self, flags: i32) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::GDALCreateDatasetMaskBand(self.c_dataset, flags) };
        _cpl_result(rv)
    }

    /// Copies every band of `self` into `destination`, which must have the same shape.
    pub fn copy_whole_raster(
        &self,
        destination: &mut Dataset,
        options: &CslStringList,
        progress: &mut Progress<'_>,
    ) -> Result<()> {
        let (func, data) = progress.as_raw();
        let rv = unsafe {
            gdal_glue_sys::GDALDatasetCopyWholeRaster(
                self.c_dataset,
                destination.c_dataset,
                options.as_ptr(),
                func,
                data,
            )
        };
        _cpl_result(rv)
    }

    /// Copies the dataset into `filename` with `driver`, passing `options` as
    /// creation options.
    pub fn create_copy<P: AsRef<Path>>(
        &self,
        driver: &Driver,
        filename: P,
        options: &CslStringList,
        progress: &mut Progress<'_>,
    ) -> Result<Dataset> {
        let c_filename = _path_to_c_string(filename)?;
        let (func, data) = progress.as_raw();
        let c_dataset = unsafe {
            gdal_glue_sys::GDALCreateCopy(
                driver.c_driver(),
                c_filename.as_ptr(),
                self.c_dataset,
                0,
                options.as_ptr(),
                func,
                data,
            )
        };
        if c_dataset.is_null() {
            return Err(_last_null_pointer_err("GDALCreateCopy"));
        }
        Ok(unsafe { Dataset::from_c_dataset(c_dataset) })
    }

    pub fn layer_count(&self) -> usize {
        (unsafe { gdal_glue_sys::GDALDatasetGetLayerCount(self.c_dataset) }) as usize
    }

    pub fn layer(&mut self, idx: usize) -> Result<Layer<'_>> {
        let idx = c_int::try_from(idx)
            .map_err(|_| GdalError::BadArgument(format!("layer index {idx} is too large")))?;
        let c_layer = unsafe { gdal_glue_sys::GDALDatasetGetLayer(self.c_dataset, idx) };
        if c_layer.is_null() {
            return Err(_last_null_pointer_err("GDALDatasetGetLayer"));
        }
        Ok(unsafe { Layer::from_c_layer(self, c_layer) })
    }

    pub fn layer_by_name(&mut self, name: &str) -> Result<Layer<'_>> {
        let c_name = CString::new(name)?;
        let c_layer =
            unsafe { gdal_glue_sys::GDALDatasetGetLayerByName(self.c_dataset, c_name.as_ptr()) };
        if c_layer.is_null() {
            return Err(_last_null_pointer_err("GDALDatasetGetLayerByName"));
        }
        Ok(unsafe { Layer::from_c_layer(self, c_layer) })
    }

    /// Creates a layer named `name`. The spatial reference is copied by the driver.
    pub fn create_layer(
        &mut self,
        name: &str,
        srs: Option<&crate::spatial_ref::SpatialRef>,
        ty: OGRwkbGeometryType::Type,
        options: &CslStringList,
    ) -> Result<Layer<'_>> {
        let c_name = CString::new(name)?;
        let c_srs = match srs {
            Some(srs) => unsafe { srs.to_c_hsrs() },
            None => ptr::null_mut(),
        };

        let c_layer = unsafe {
            gdal_glue_sys::GDALDatasetCreateLayer(
                self.c_dataset,
                c_name.as_ptr(),
                c_srs,
                ty,
                options.as_ptr(),
            )
        };
        if c_layer.is_null() {
            return Err(_last_null_pointer_err("GDALDatasetCreateLayer"));
        };
        Ok(unsafe { Layer::from_c_layer(self, c_layer) })
    }
}

impl MajorObject for Dataset {
    unsafe fn gdal_object_ptr(&self) -> GDALMajorObjectH {
        self.c_dataset
    }
}

impl Metadata for Dataset {}

impl Drop for Dataset {
    fn drop(&mut self) {
        unsafe {
            gdal_glue_sys::GDALClose(self.c_dataset);
        }
    }
}
