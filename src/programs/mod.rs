//! Library forms of the `gdalinfo`, `gdal_translate` and `gdalwarp` programs.
//!
//! Options are given as the command line arguments of the program, e.g.
//! `["-of", "GTiff", "-outsize", "50%", "50%"]`.

mod info;
mod translate;
mod warp;

use std::ffi::CString;
use std::ptr;

use libc::c_char;

use crate::errors::*;

pub use info::info;
pub use translate::{translate, TranslateOptions};
pub use warp::{warp, WarpAppOptions};

/// NULL-terminated argument vector borrowing from `c_args`.
///
/// The utilities take `char **` but never write through it.
fn c_argv(c_args: &[CString]) -> Vec<*mut c_char> {
    c_args
        .iter()
        .map(|arg| arg.as_ptr() as *mut c_char)
        .chain(std::iter::once(ptr::null_mut()))
        .collect()
}

fn to_c_args<S: Into<Vec<u8>>, I: IntoIterator<Item = S>>(args: I) -> Result<Vec<CString>> {
    args.into_iter()
        .map(CString::new)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Into::into)
}
