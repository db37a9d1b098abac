use std::ptr;

use gdal_glue_sys::GDALRasterBandH;
use libc::c_int;

use crate::cpl::CslStringList;
use crate::errors::*;
use crate::progress::Progress;
use crate::raster::RasterBand;
use crate::utils::_cpl_result;
use crate::vector::Layer;

fn mask_ptr(mask: Option<&RasterBand<'_>>) -> GDALRasterBandH {
    match mask {
        Some(mask) => unsafe { mask.c_rasterband() },
        None => ptr::null_mut(),
    }
}

/// Pixel neighbourhood used when grouping pixels into regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectedness {
    #[default]
    Four,
    Eight,
}

impl Connectedness {
    fn c_int(self) -> c_int {
        match self {
            Connectedness::Four => 4,
            Connectedness::Eight => 8,
        }
    }
}

/// Writes to `proximity` the distance of every pixel to the nearest target
/// pixel of `src`.
///
/// `options` are the `GDALComputeProximity` options, e.g. `VALUES=1,2`,
/// `DISTUNITS=GEO` or `MAXDIST=10`.
pub fn compute_proximity(
    src: &RasterBand<'_>,
    proximity: &mut RasterBand<'_>,
    options: &CslStringList,
    progress: &mut Progress<'_>,
) -> Result<()> {
    let (func, data) = progress.as_raw();
    let rv = unsafe {
        gdal_glue_sys::GDALComputeProximity(
            src.c_rasterband(),
            proximity.c_rasterband(),
            options.as_ptr(),
            func,
            data,
        )
    };
    _cpl_result(rv)
}

/// Interpolates nodata pixels of `target` from valid pixels at most
/// `max_search_dist` pixels away.
///
/// `mask` selects the valid pixels; without it the band's own mask is used.
pub fn fill_nodata(
    target: &mut RasterBand<'_>,
    mask: Option<&RasterBand<'_>>,
    max_search_dist: f64,
    smoothing_iterations: u32,
    options: &CslStringList,
    progress: &mut Progress<'_>,
) -> Result<()> {
    let smoothing_iterations = c_int::try_from(smoothing_iterations).map_err(|_| {
        GdalError::BadArgument(format!("{smoothing_iterations} smoothing iterations is too many"))
    })?;
    let (func, data) = progress.as_raw();
    let rv = unsafe {
        gdal_glue_sys::GDALFillNodata(
            target.c_rasterband(),
            mask_ptr(mask),
            max_search_dist,
            0,
            smoothing_iterations,
            options.as_ptr(),
            func,
            data,
        )
    };
    _cpl_result(rv)
}

fn field_index_c_int(field_index: Option<usize>) -> Result<c_int> {
    match field_index {
        None => Ok(-1),
        Some(index) => c_int::try_from(index).map_err(|_| GdalError::InvalidFieldIndex {
            index,
            method_name: "GDALPolygonize",
        }),
    }
}

/// Adds one polygon feature to `layer` per connected region of equal values
/// in `src`, compared as integers.
///
/// The region value is written to the field at `field_index` when given.
pub fn polygonize(
    src: &RasterBand<'_>,
    mask: Option<&RasterBand<'_>>,
    layer: &mut Layer<'_>,
    field_index: Option<usize>,
    options: &CslStringList,
    progress: &mut Progress<'_>,
) -> Result<()> {
    let field_index = field_index_c_int(field_index)?;
    let (func, data) = progress.as_raw();
    let rv = unsafe {
        gdal_glue_sys::GDALPolygonize(
            src.c_rasterband(),
            mask_ptr(mask),
            layer.c_layer(),
            field_index,
            options.as_ptr(),
            func,
            data,
        )
    };
    _cpl_result(rv)
}

/// Like [`polygonize`], with values compared as floating point.
pub fn fpolygonize(
    src: &RasterBand<'_>,
    mask: Option<&RasterBand<'_>>,
    layer: &mut Layer<'_>,
    field_index: Option<usize>,
    options: &CslStringList,
    progress: &mut Progress<'_>,
) -> Result<()> {
    let field_index = field_index_c_int(field_index)?;
    let (func, data) = progress.as_raw();
    let rv = unsafe {
        gdal_glue_sys::GDALFPolygonize(
            src.c_rasterband(),
            mask_ptr(mask),
            layer.c_layer(),
            field_index,
            options.as_ptr(),
            func,
            data,
        )
    };
    _cpl_result(rv)
}

/// Replaces regions of `src` smaller than `threshold` pixels with the value
/// of their largest neighbour, writing the result to `dst`.
pub fn sieve_filter(
    src: &RasterBand<'_>,
    mask: Option<&RasterBand<'_>>,
    dst: &mut RasterBand<'_>,
    threshold: usize,
    connectedness: Connectedness,
    options: &CslStringList,
    progress: &mut Progress<'_>,
) -> Result<()> {
    let threshold = c_int::try_from(threshold)
        .map_err(|_| GdalError::BadArgument(format!("sieve threshold {threshold} is too large")))?;
    let (func, data) = progress.as_raw();
    let rv = unsafe {
        gdal_glue_sys::GDALSieveFilter(
            src.c_rasterband(),
            mask_ptr(mask),
            dst.c_rasterband(),
            threshold,
            connectedness.c_int(),
            options.as_ptr(),
            func,
            data,
        )
    };
    _cpl_result(rv)
}
