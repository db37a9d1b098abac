use std::ptr;

use gdal_glue_sys::{CPLErr, OGRCoordinateTransformationH};
use libc::c_int;

use crate::errors::*;
use crate::spatial_ref::SpatialRef;
use crate::utils::{_last_cpl_err, _last_null_pointer_err};

/// A coordinate transformation from one [`SpatialRef`] to another.
#[derive(Debug)]
pub struct CoordTransform {
    inner: OGRCoordinateTransformationH,
    from: String,
    to: String,
}

impl Drop for CoordTransform {
    fn drop(&mut self) {
        unsafe { gdal_glue_sys::OCTDestroyCoordinateTransformation(self.inner) };
    }
}

impl CoordTransform {
    /// See: [OCTNewCoordinateTransformation](https://gdal.org/api/ogr_srs_api.html#_CPPv430OCTNewCoordinateTransformation20OGRSpatialReferenceH20OGRSpatialReferenceH)
    pub fn new(source: &SpatialRef, target: &SpatialRef) -> Result<CoordTransform> {
        let c_obj = unsafe {
            gdal_glue_sys::OCTNewCoordinateTransformation(source.to_c_hsrs(), target.to_c_hsrs())
        };
        if c_obj.is_null() {
            return Err(_last_null_pointer_err("OCTNewCoordinateTransformation"));
        }
        Ok(Self {
            inner: c_obj,
            from: source.authority().or_else(|_| source.to_proj4())?,
            to: target.authority().or_else(|_| target.to_proj4())?,
        })
    }

    /// Transforms the points in place.
    ///
    /// `z` may be empty to transform in 2D. Slices of different lengths are a
    /// [`GdalError::BadArgument`]; a point GDAL cannot transform fails the
    /// whole call with [`GdalError::InvalidCoordinateRange`].
    pub fn transform_coords(&self, x: &mut [f64], y: &mut [f64], z: &mut [f64]) -> Result<()> {
        let nb_coords = x.len();
        if nb_coords != y.len() || (!z.is_empty() && nb_coords != z.len()) {
            return Err(GdalError::BadArgument(format!(
                "transform coordinate slices have different lengths: {} / {} / {}",
                nb_coords,
                y.len(),
                z.len()
            )));
        }
        let count = c_int::try_from(nb_coords)
            .map_err(|_| GdalError::BadArgument(format!("{nb_coords} points are too many")))?;

        let ret_val = unsafe {
            gdal_glue_sys::OCTTransform(
                self.inner,
                count,
                x.as_mut_ptr(),
                y.as_mut_ptr(),
                if z.is_empty() { ptr::null_mut() } else { z.as_mut_ptr() },
            ) == 1
        };

        if ret_val {
            return Ok(());
        }
        let msg = match _last_cpl_err(CPLErr::CE_Failure) {
            GdalError::CplError { msg, .. } if msg.trim().is_empty() => None,
            GdalError::CplError { msg, .. } => Some(msg),
            err => return Err(err),
        };
        Err(GdalError::InvalidCoordinateRange {
            from: self.from.clone(),
            to: self.to.clone(),
            msg,
        })
    }

    /// Returns the wrapped handle, still owned by `self`.
    ///
    /// # Safety
    /// The handle must not outlive `self`.
    pub unsafe fn to_c_hct(&self) -> OGRCoordinateTransformationH {
        self.inner
    }
}
