use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::path::Path;

use gdal_glue_sys::{self, CPLErr, OGRErr};

use crate::errors::*;

/// Copies a borrowed NUL-terminated string. A NULL pointer yields `""`.
pub fn _string(raw_ptr: *const c_char) -> String {
    if raw_ptr.is_null() {
        return String::new();
    }
    let c_str = unsafe { CStr::from_ptr(raw_ptr) };
    c_str.to_string_lossy().into_owned()
}

/// Copies a borrowed, NULL-terminated `char **`.
pub fn _string_array(raw_ptr: *mut *mut c_char) -> Vec<String> {
    let mut ret_val: Vec<String> = vec![];
    if raw_ptr.is_null() {
        return ret_val;
    }
    let mut i = 0;
    unsafe {
        loop {
            let next = raw_ptr.add(i).read();
            if next.is_null() {
                break;
            }
            ret_val.push(_string(next));
            i += 1;
        }
    }
    ret_val
}

/// Splits a `KEY<delim>VALUE` entry, `None` when `delim` is absent.
pub fn _string_tuple(raw_ptr: *const c_char, delim: char) -> Option<(String, String)> {
    let entry = _string(raw_ptr);
    entry
        .split_once(delim)
        .map(|(k, v)| (k.to_string(), v.to_string()))
}

/// Takes ownership of a string allocated by GDAL and releases it with `VSIFree`.
pub fn _string_owned(raw_ptr: *mut c_char) -> String {
    let value = _string(raw_ptr);
    unsafe { gdal_glue_sys::VSIFree(raw_ptr.cast()) };
    value
}

pub fn _last_cpl_err(cpl_err_class: CPLErr::Type) -> GdalError {
    let last_err_no = unsafe { gdal_glue_sys::CPLGetLastErrorNo() };
    let last_err_msg = _string(unsafe { gdal_glue_sys::CPLGetLastErrorMsg() });
    unsafe { gdal_glue_sys::CPLErrorReset() };
    GdalError::CplError {
        class: cpl_err_class.into(),
        number: last_err_no,
        msg: last_err_msg,
    }
}

pub fn _last_null_pointer_err(method_name: &'static str) -> GdalError {
    let last_err_msg = _string(unsafe { gdal_glue_sys::CPLGetLastErrorMsg() });
    unsafe { gdal_glue_sys::CPLErrorReset() };
    GdalError::NullPointer {
        method_name,
        msg: last_err_msg,
    }
}

/// Maps a `CPLErr` return code to `Ok` or the pending CPL error.
pub fn _cpl_result(rv: CPLErr::Type) -> Result<()> {
    if rv != CPLErr::CE_None {
        return Err(_last_cpl_err(rv));
    }
    Ok(())
}

/// Maps an `OGRErr` return code to `Ok` or [`GdalError::OgrError`], code unchanged.
pub fn _ogr_result(rv: OGRErr::Type, method_name: &'static str) -> Result<()> {
    if rv != OGRErr::OGRERR_NONE {
        return Err(GdalError::OgrError {
            err: rv,
            method_name,
        });
    }
    Ok(())
}

/// Converts a size or index for a C `int` argument.
pub fn _to_c_int(value: usize, what: &str) -> Result<c_int> {
    c_int::try_from(value)
        .map_err(|_| GdalError::BadArgument(format!("{what} {value} is too large")))
}

pub fn _path_to_c_string<P: AsRef<Path>>(path: P) -> Result<CString> {
    let path_ref: &Path = path.as_ref();
    let path_str = path_ref.to_string_lossy();
    CString::new(path_str.as_ref()).map_err(Into::into)
}
