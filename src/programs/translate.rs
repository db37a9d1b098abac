use std::path::Path;
use std::ptr;

use gdal_glue_sys::GDALTranslateOptions;
use libc::c_int;

use crate::dataset::Dataset;
use crate::errors::*;
use crate::programs::{c_argv, to_c_args};
use crate::progress::Progress;
use crate::utils::{_last_null_pointer_err, _path_to_c_string};

/// Parsed `gdal_translate` arguments.
#[derive(Debug)]
pub struct TranslateOptions {
    c_options: *mut GDALTranslateOptions,
}

impl TranslateOptions {
    pub fn new<S: Into<Vec<u8>>, I: IntoIterator<Item = S>>(args: I) -> Result<Self> {
        let c_args = to_c_args(args)?;
        let mut c_argv = c_argv(&c_args);
        let c_options =
            unsafe { gdal_glue_sys::GDALTranslateOptionsNew(c_argv.as_mut_ptr(), ptr::null_mut()) };
        if c_options.is_null() {
            return Err(_last_null_pointer_err("GDALTranslateOptionsNew"));
        }
        Ok(TranslateOptions { c_options })
    }

    /// # Safety
    /// The pointer is owned by `self`.
    pub unsafe fn c_options(&self) -> *mut GDALTranslateOptions {
        self.c_options
    }
}

impl Drop for TranslateOptions {
    fn drop(&mut self) {
        unsafe { gdal_glue_sys::GDALTranslateOptionsFree(self.c_options) };
    }
}

/// Converts `src` into a new dataset at `dest`.
pub fn translate<P: AsRef<Path>>(
    src: &Dataset,
    dest: P,
    options: &mut TranslateOptions,
    progress: &mut Progress<'_>,
) -> Result<Dataset> {
    let c_dest = _path_to_c_string(dest)?;
    let (func, data) = progress.as_raw();
    let mut usage_error: c_int = 0;
    let c_dataset = unsafe {
        gdal_glue_sys::GDALTranslateOptionsSetProgress(options.c_options, func, data);
        let c_dataset = gdal_glue_sys::GDALTranslate(
            c_dest.as_ptr(),
            src.c_dataset(),
            options.c_options,
            &mut usage_error,
        );
        // progress may not outlive this call
        gdal_glue_sys::GDALTranslateOptionsSetProgress(options.c_options, None, ptr::null_mut());
        c_dataset
    };
    if usage_error != 0 {
        return Err(GdalError::UsageError {
            method_name: "GDALTranslate",
        });
    }
    if c_dataset.is_null() {
        return Err(_last_null_pointer_err("GDALTranslate"));
    }
    Ok(unsafe { Dataset::from_c_dataset(c_dataset) })
}
