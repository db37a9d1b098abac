use libc::{c_char, c_double, c_int, c_void};

use crate::gdal::{GDALProgressFunc, GDALRasterBandH};
use crate::gdal_enums::{GDALDataType, GDALGridAlgorithm};
use crate::ogr::OGRLayerH;
use crate::{CPLErr, GUInt32};

extern "C" {
    pub fn GDALComputeProximity(
        hSrcBand: GDALRasterBandH,
        hProximityBand: GDALRasterBandH,
        papszOptions: *mut *mut c_char,
        pfnProgress: GDALProgressFunc,
        pProgressArg: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALFillNodata(
        hTargetBand: GDALRasterBandH,
        hMaskBand: GDALRasterBandH,
        dfMaxSearchDist: c_double,
        bDeprecatedOption: c_int,
        nSmoothingIterations: c_int,
        papszOptions: *mut *mut c_char,
        pfnProgress: GDALProgressFunc,
        pProgressArg: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALPolygonize(
        hSrcBand: GDALRasterBandH,
        hMaskBand: GDALRasterBandH,
        hOutLayer: OGRLayerH,
        iPixValField: c_int,
        papszOptions: *mut *mut c_char,
        pfnProgress: GDALProgressFunc,
        pProgressArg: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALFPolygonize(
        hSrcBand: GDALRasterBandH,
        hMaskBand: GDALRasterBandH,
        hOutLayer: OGRLayerH,
        iPixValField: c_int,
        papszOptions: *mut *mut c_char,
        pfnProgress: GDALProgressFunc,
        pProgressArg: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALSieveFilter(
        hSrcBand: GDALRasterBandH,
        hMaskBand: GDALRasterBandH,
        hDstBand: GDALRasterBandH,
        nSizeThreshold: c_int,
        nConnectedness: c_int,
        papszOptions: *mut *mut c_char,
        pfnProgress: GDALProgressFunc,
        pProgressArg: *mut c_void,
    ) -> CPLErr::Type;

    /// Parses `name:key=value:...` into an algorithm and an options struct
    /// that must be released with `VSIFree`.
    pub fn GDALGridParseAlgorithmAndOptions(
        pszAlgorithm: *const c_char,
        peAlgorithm: *mut GDALGridAlgorithm::Type,
        ppOptions: *mut *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALGridCreate(
        eAlgorithm: GDALGridAlgorithm::Type,
        poOptions: *const c_void,
        nPoints: GUInt32,
        padfX: *const c_double,
        padfY: *const c_double,
        padfZ: *const c_double,
        dfXMin: c_double,
        dfXMax: c_double,
        dfYMin: c_double,
        dfYMax: c_double,
        nXSize: GUInt32,
        nYSize: GUInt32,
        eType: GDALDataType::Type,
        pData: *mut c_void,
        pfnProgress: GDALProgressFunc,
        pProgressArg: *mut c_void,
    ) -> CPLErr::Type;
}
