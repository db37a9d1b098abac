use std::path::Path;
use std::ptr;

use gdal_glue_sys::{GDALDatasetH, GDALWarpAppOptions};
use libc::c_int;

use crate::dataset::Dataset;
use crate::errors::*;
use crate::programs::{c_argv, to_c_args};
use crate::progress::Progress;
use crate::utils::{_last_null_pointer_err, _path_to_c_string};

/// Parsed `gdalwarp` arguments.
#[derive(Debug)]
pub struct WarpAppOptions {
    c_options: *mut GDALWarpAppOptions,
}

impl WarpAppOptions {
    pub fn new<S: Into<Vec<u8>>, I: IntoIterator<Item = S>>(args: I) -> Result<Self> {
        let c_args = to_c_args(args)?;
        let mut c_argv = c_argv(&c_args);
        let c_options =
            unsafe { gdal_glue_sys::GDALWarpAppOptionsNew(c_argv.as_mut_ptr(), ptr::null_mut()) };
        if c_options.is_null() {
            return Err(_last_null_pointer_err("GDALWarpAppOptionsNew"));
        }
        Ok(WarpAppOptions { c_options })
    }

    /// # Safety
    /// The pointer is owned by `self`.
    pub unsafe fn c_options(&self) -> *mut GDALWarpAppOptions {
        self.c_options
    }
}

impl Drop for WarpAppOptions {
    fn drop(&mut self) {
        unsafe { gdal_glue_sys::GDALWarpAppOptionsFree(self.c_options) };
    }
}

/// Mosaics and reprojects `sources` into a new dataset at `dest`.
pub fn warp<P: AsRef<Path>>(
    dest: P,
    sources: &[&Dataset],
    options: &mut WarpAppOptions,
    progress: &mut Progress<'_>,
) -> Result<Dataset> {
    if sources.is_empty() {
        return Err(GdalError::BadArgument("warp needs at least one source dataset".into()));
    }
    let c_dest = _path_to_c_string(dest)?;
    let mut c_sources: Vec<GDALDatasetH> =
        sources.iter().map(|ds| unsafe { ds.c_dataset() }).collect();
    let (func, data) = progress.as_raw();
    let mut usage_error: c_int = 0;
    let c_dataset = unsafe {
        gdal_glue_sys::GDALWarpAppOptionsSetProgress(options.c_options, func, data);
        let c_dataset = gdal_glue_sys::GDALWarp(
            c_dest.as_ptr(),
            ptr::null_mut(),
            c_sources.len() as c_int,
            c_sources.as_mut_ptr(),
            options.c_options,
            &mut usage_error,
        );
        gdal_glue_sys::GDALWarpAppOptionsSetProgress(options.c_options, None, ptr::null_mut());
        c_dataset
    };
    if usage_error != 0 {
        return Err(GdalError::UsageError {
            method_name: "GDALWarp",
        });
    }
    if c_dataset.is_null() {
        return Err(_last_null_pointer_err("GDALWarp"));
    }
    Ok(unsafe { Dataset::from_c_dataset(c_dataset) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial_ref::SpatialRef;
    use crate::test_utils::{mem_raster, SuppressGDALErrorLog};

    fn georeferenced(origin_x: f64, value: f64) -> Dataset {
        let mut ds = mem_raster::<u8>(10, 10, 1);
        ds.set_geo_transform(&[origin_x, 1.0, 0.0, 10.0, 0.0, -1.0]).unwrap();
        let wkt = SpatialRef::from_epsg(4326).unwrap().to_wkt().unwrap();
        ds.set_projection(&wkt).unwrap();
        ds.rasterband(1).unwrap().fill(value, None).unwrap();
        ds
    }

    #[test]
    fn test_warp_mosaic() {
        let left = georeferenced(0.0, 1.0);
        let right = georeferenced(10.0, 2.0);
        let mut options = WarpAppOptions::new(["-of", "MEM"]).unwrap();
        let mut ticks = 0;
        let mut progress = Progress::new(|_, _| {
            ticks += 1;
            true
        });
        let out = warp("", &[&left, &right], &mut options, &mut progress).unwrap();
        drop(progress);

        assert!(ticks > 0);
        assert_eq!(out.raster_size(), (20, 10));
        let values = out.rasterband(1).unwrap().read_as::<u8>((0, 0), (20, 1), (20, 1)).unwrap();
        assert_eq!(&values.data[..10], &[1; 10]);
        assert_eq!(&values.data[10..], &[2; 10]);
    }

    #[test]
    fn test_warp_without_sources() {
        let mut options = WarpAppOptions::new(["-of", "MEM"]).unwrap();
        assert!(matches!(
            warp("", &[], &mut options, &mut Progress::none()),
            Err(GdalError::BadArgument(_))
        ));
    }

    #[test]
    fn test_warp_cancelled() {
        let _nolog = SuppressGDALErrorLog::new();
        let src = georeferenced(0.0, 1.0);
        let mut options = WarpAppOptions::new(["-of", "MEM"]).unwrap();
        let mut progress = Progress::new(|_, _| false);
        assert!(warp("", &[&src], &mut options, &mut progress).is_err());
    }
}
