//! GDAL configuration, error routing and block cache.
//!
//! Options set here override the environment variables of the same name.
//!
//! ```
//! use gdal_glue::config::*;
//!
//! set_config_option("GDAL_PAM_ENABLED", "NO").unwrap();
//! assert_eq!(get_config_option("GDAL_PAM_ENABLED", "").unwrap(), "NO");
//! clear_config_option("GDAL_PAM_ENABLED").unwrap();
//! assert_eq!(get_config_option("GDAL_PAM_ENABLED", "YES").unwrap(), "YES");
//! ```
//!
//! See [GDAL configuration options](https://gdal.org/user/configoptions.html).

use std::ffi::CString;
use std::ptr;
use std::sync::{Mutex, MutexGuard};

use gdal_glue_sys::{CPLErr, CPLErrorNum, CPLGetErrorHandlerUserData};
use libc::{c_char, c_void};
use log::{debug, error, info, warn};

use crate::errors::{CplErrType, Result};
use crate::utils::_string;

pub fn set_config_option(key: &str, value: &str) -> Result<()> {
    let c_key = CString::new(key.as_bytes())?;
    let c_val = CString::new(value.as_bytes())?;
    unsafe {
        gdal_glue_sys::CPLSetConfigOption(c_key.as_ptr(), c_val.as_ptr());
    };
    Ok(())
}

/// Returns `default` when `key` is not set.
pub fn get_config_option(key: &str, default: &str) -> Result<String> {
    let c_key = CString::new(key.as_bytes())?;
    let c_default = CString::new(default.as_bytes())?;
    let rv = unsafe { gdal_glue_sys::CPLGetConfigOption(c_key.as_ptr(), c_default.as_ptr()) };
    Ok(_string(rv))
}

pub fn clear_config_option(key: &str) -> Result<()> {
    let c_key = CString::new(key.as_bytes())?;
    unsafe {
        gdal_glue_sys::CPLSetConfigOption(c_key.as_ptr(), ptr::null());
    };
    Ok(())
}

/// Like [`set_config_option`], visible to the calling thread only.
pub fn set_thread_local_config_option(key: &str, value: &str) -> Result<()> {
    let c_key = CString::new(key.as_bytes())?;
    let c_val = CString::new(value.as_bytes())?;
    unsafe {
        gdal_glue_sys::CPLSetThreadLocalConfigOption(c_key.as_ptr(), c_val.as_ptr());
    };
    Ok(())
}

pub fn get_thread_local_config_option(key: &str, default: &str) -> Result<String> {
    let c_key = CString::new(key.as_bytes())?;
    let c_default = CString::new(default.as_bytes())?;
    let rv = unsafe {
        gdal_glue_sys::CPLGetThreadLocalConfigOption(c_key.as_ptr(), c_default.as_ptr())
    };
    Ok(_string(rv))
}

pub fn clear_thread_local_config_option(key: &str) -> Result<()> {
    let c_key = CString::new(key.as_bytes())?;
    unsafe {
        gdal_glue_sys::CPLSetThreadLocalConfigOption(c_key.as_ptr(), ptr::null());
    };
    Ok(())
}

type ErrorCallbackType = dyn FnMut(CplErrType, i32, &str) + 'static + Send;
// Double box: the outer one keeps the address stable while it moves in and out
// of the mutex, the inner one turns the fat `dyn FnMut` into a thin pointer
// that survives the round trip through `*mut c_void`.
type PinnedErrorCallback = Box<Box<ErrorCallbackType>>;

static ERROR_CALLBACK: Mutex<Option<PinnedErrorCallback>> = Mutex::new(None);

fn callback_lock() -> MutexGuard<'static, Option<PinnedErrorCallback>> {
    // poisoning can only come from a panic inside `CPLSetErrorHandlerEx`, the value is still valid
    ERROR_CALLBACK
        .lock()
        .unwrap_or_else(|poison_error| poison_error.into_inner())
}

/// Installs a process wide handler for every message GDAL emits.
///
/// The callback may be invoked from any thread GDAL runs on.
pub fn set_error_handler<F>(callback: F)
where
    F: FnMut(CplErrType, i32, &str) + 'static + Send + Sync,
{
    unsafe extern "C" fn error_handler(
        error_type: CPLErr::Type,
        error_num: CPLErrorNum,
        error_msg_ptr: *const c_char,
    ) {
        let error_msg = _string(error_msg_ptr);
        let error_type: CplErrType = error_type.into();

        let callback_raw = CPLGetErrorHandlerUserData();
        if callback_raw.is_null() {
            return;
        }
        let callback: &mut Box<ErrorCallbackType> = &mut *(callback_raw as *mut Box<_>);

        callback(error_type, error_num, &error_msg);
    }

    let mut callback: PinnedErrorCallback = Box::new(Box::new(callback));
    let callback_ref: &mut Box<ErrorCallbackType> = callback.as_mut();

    let mut callback_lock = callback_lock();

    // swapping the handler is fenced by the lock
    unsafe {
        gdal_glue_sys::CPLSetErrorHandlerEx(
            Some(error_handler),
            callback_ref as *mut _ as *mut c_void,
        );
    };

    // keep the callback alive for as long as GDAL holds its pointer
    callback_lock.replace(callback);
}

/// Restores GDAL's default handler.
pub fn remove_error_handler() {
    let mut callback_lock = callback_lock();

    unsafe {
        gdal_glue_sys::CPLSetErrorHandlerEx(None, ptr::null_mut());
    };

    callback_lock.take();
}

/// Forwards every GDAL message to the [`log`] facade under target `gdal`.
pub fn set_log_error_handler() {
    set_error_handler(|class, number, msg| match class {
        CplErrType::Debug => debug!(target: "gdal", "{msg}"),
        CplErrType::Warning => warn!(target: "gdal", "[{number}] {msg}"),
        CplErrType::Failure | CplErrType::Fatal => {
            error!(target: "gdal", "[{number}] {msg}")
        }
        CplErrType::None => info!(target: "gdal", "{msg}"),
    });
}

/// Sets the raster block cache limit in bytes.
pub fn set_cache_max(bytes: u64) {
    let bytes = i64::try_from(bytes).unwrap_or(i64::MAX);
    unsafe { gdal_glue_sys::GDALSetCacheMax64(bytes) };
}

pub fn cache_max() -> u64 {
    unsafe { gdal_glue_sys::GDALGetCacheMax64() }.max(0) as u64
}

pub fn cache_used() -> u64 {
    unsafe { gdal_glue_sys::GDALGetCacheUsed64() }.max(0) as u64
}

/// Evicts the least recently used block. Returns `false` when the cache is empty.
pub fn flush_cache_block() -> bool {
    unsafe { gdal_glue_sys::GDALFlushCacheBlock() != 0 }
}
