use std::ptr;

use crate::dataset::Dataset;
use crate::errors::*;
use crate::programs::{c_argv, to_c_args};
use crate::utils::{_last_null_pointer_err, _string_owned};

/// The `gdalinfo` report of `dataset`, `args` being its command line
/// arguments (`-json`, `-stats`, ...).
pub fn info<S: Into<Vec<u8>>, I: IntoIterator<Item = S>>(
    dataset: &Dataset,
    args: I,
) -> Result<String> {
    let c_args = to_c_args(args)?;
    let mut c_argv = c_argv(&c_args);

    let c_options =
        unsafe { gdal_glue_sys::GDALInfoOptionsNew(c_argv.as_mut_ptr(), ptr::null_mut()) };
    if c_options.is_null() {
        return Err(_last_null_pointer_err("GDALInfoOptionsNew"));
    }
    let c_info = unsafe { gdal_glue_sys::GDALInfo(dataset.c_dataset(), c_options) };
    unsafe { gdal_glue_sys::GDALInfoOptionsFree(c_options) };
    if c_info.is_null() {
        return Err(_last_null_pointer_err("GDALInfo"));
    }
    Ok(_string_owned(c_info))
}
