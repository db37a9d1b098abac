use libc::{c_char, c_int, c_void};

use crate::gdal::{GDALDatasetH, GDALProgressFunc};

#[repr(C)]
pub struct GDALInfoOptions {
    _unused: [u8; 0],
}
#[repr(C)]
pub struct GDALInfoOptionsForBinary {
    _unused: [u8; 0],
}
#[repr(C)]
pub struct GDALTranslateOptions {
    _unused: [u8; 0],
}
#[repr(C)]
pub struct GDALTranslateOptionsForBinary {
    _unused: [u8; 0],
}
#[repr(C)]
pub struct GDALWarpAppOptions {
    _unused: [u8; 0],
}
#[repr(C)]
pub struct GDALWarpAppOptionsForBinary {
    _unused: [u8; 0],
}

extern "C" {
    pub fn GDALInfoOptionsNew(
        papszArgv: *mut *mut c_char,
        psOptionsForBinary: *mut GDALInfoOptionsForBinary,
    ) -> *mut GDALInfoOptions;
    pub fn GDALInfoOptionsFree(psOptions: *mut GDALInfoOptions);
    /// The returned string must be released with `VSIFree`.
    pub fn GDALInfo(hDataset: GDALDatasetH, psOptions: *const GDALInfoOptions) -> *mut c_char;

    pub fn GDALTranslateOptionsNew(
        papszArgv: *mut *mut c_char,
        psOptionsForBinary: *mut GDALTranslateOptionsForBinary,
    ) -> *mut GDALTranslateOptions;
    pub fn GDALTranslateOptionsFree(psOptions: *mut GDALTranslateOptions);
    pub fn GDALTranslateOptionsSetProgress(
        psOptions: *mut GDALTranslateOptions,
        pfnProgress: GDALProgressFunc,
        pProgressData: *mut c_void,
    );
    pub fn GDALTranslate(
        pszDestFilename: *const c_char,
        hSrcDataset: GDALDatasetH,
        psOptions: *const GDALTranslateOptions,
        pbUsageError: *mut c_int,
    ) -> GDALDatasetH;

    pub fn GDALWarpAppOptionsNew(
        papszArgv: *mut *mut c_char,
        psOptionsForBinary: *mut GDALWarpAppOptionsForBinary,
    ) -> *mut GDALWarpAppOptions;
    pub fn GDALWarpAppOptionsFree(psOptions: *mut GDALWarpAppOptions);
    pub fn GDALWarpAppOptionsSetProgress(
        psOptions: *mut GDALWarpAppOptions,
        pfnProgress: GDALProgressFunc,
        pProgressData: *mut c_void,
    );
    pub fn GDALWarp(
        pszDest: *const c_char,
        hDstDS: GDALDatasetH,
        nSrcCount: c_int,
        pahSrcDS: *mut GDALDatasetH,
        psOptions: *const GDALWarpAppOptions,
        pbUsageError: *mut c_int,
    ) -> GDALDatasetH;
}
