use libc::{c_char, c_double, c_int, c_uint, c_void};

use crate::gdal_enums::*;
use crate::ogr::{OGRLayerH, OGRSpatialReferenceH};
use crate::ogr_enums::OGRwkbGeometryType;
use crate::{CPLErr, CSLConstList, GIntBig};

pub type GDALMajorObjectH = *mut c_void;
pub type GDALDatasetH = *mut c_void;
pub type GDALRasterBandH = *mut c_void;
pub type GDALDriverH = *mut c_void;

/// `int (*)(double dfComplete, const char *pszMessage, void *pProgressArg)`.
/// A zero return asks the running operation to stop.
pub type GDALProgressFunc = Option<
    unsafe extern "C" fn(
        dfComplete: c_double,
        pszMessage: *const c_char,
        pProgressArg: *mut c_void,
    ) -> c_int,
>;

extern "C" {
    pub fn GDALVersionInfo(pszRequest: *const c_char) -> *const c_char;

    // progress
    pub fn GDALDummyProgress(
        dfComplete: c_double,
        pszMessage: *const c_char,
        pData: *mut c_void,
    ) -> c_int;
    pub fn GDALTermProgress(
        dfComplete: c_double,
        pszMessage: *const c_char,
        pData: *mut c_void,
    ) -> c_int;
    pub fn GDALScaledProgress(
        dfComplete: c_double,
        pszMessage: *const c_char,
        pData: *mut c_void,
    ) -> c_int;
    pub fn GDALCreateScaledProgress(
        dfMin: c_double,
        dfMax: c_double,
        pfnProgress: GDALProgressFunc,
        pData: *mut c_void,
    ) -> *mut c_void;
    pub fn GDALDestroyScaledProgress(pData: *mut c_void);

    // block cache
    pub fn GDALSetCacheMax64(nBytes: GIntBig);
    pub fn GDALGetCacheMax64() -> GIntBig;
    pub fn GDALGetCacheUsed64() -> GIntBig;
    pub fn GDALFlushCacheBlock() -> c_int;

    // driver
    pub fn GDALAllRegister();
    pub fn GDALDestroyDriverManager();
    pub fn GDALGetDriverCount() -> c_int;
    pub fn GDALGetDriver(iDriver: c_int) -> GDALDriverH;
    pub fn GDALGetDriverByName(pszName: *const c_char) -> GDALDriverH;
    pub fn GDALIdentifyDriver(
        pszFilename: *const c_char,
        papszFileList: CSLConstList,
    ) -> GDALDriverH;
    pub fn GDALRegisterDriver(hDriver: GDALDriverH) -> c_int;
    pub fn GDALDeregisterDriver(hDriver: GDALDriverH);
    pub fn GDALGetDriverShortName(hDriver: GDALDriverH) -> *const c_char;
    pub fn GDALGetDriverLongName(hDriver: GDALDriverH) -> *const c_char;
    pub fn GDALCreate(
        hDriver: GDALDriverH,
        pszFilename: *const c_char,
        nXSize: c_int,
        nYSize: c_int,
        nBands: c_int,
        eBandType: GDALDataType::Type,
        papszOptions: CSLConstList,
    ) -> GDALDatasetH;
    pub fn GDALCreateCopy(
        hDriver: GDALDriverH,
        pszFilename: *const c_char,
        hSrcDS: GDALDatasetH,
        bStrict: c_int,
        papszOptions: CSLConstList,
        pfnProgress: GDALProgressFunc,
        pProgressData: *mut c_void,
    ) -> GDALDatasetH;
    pub fn GDALDeleteDataset(hDriver: GDALDriverH, pszFilename: *const c_char) -> CPLErr::Type;
    pub fn GDALRenameDataset(
        hDriver: GDALDriverH,
        pszNewName: *const c_char,
        pszOldName: *const c_char,
    ) -> CPLErr::Type;
    pub fn GDALCopyDatasetFiles(
        hDriver: GDALDriverH,
        pszNewName: *const c_char,
        pszOldName: *const c_char,
    ) -> CPLErr::Type;

    // dataset
    pub fn GDALOpenEx(
        pszFilename: *const c_char,
        nOpenFlags: c_uint,
        papszAllowedDrivers: *const *const c_char,
        papszOpenOptions: *const *const c_char,
        papszSiblingFiles: *const *const c_char,
    ) -> GDALDatasetH;
    pub fn GDALClose(hDS: GDALDatasetH);
    pub fn GDALGetDatasetDriver(hDataset: GDALDatasetH) -> GDALDriverH;
    pub fn GDALGetRasterXSize(hDataset: GDALDatasetH) -> c_int;
    pub fn GDALGetRasterYSize(hDataset: GDALDatasetH) -> c_int;
    pub fn GDALGetRasterCount(hDataset: GDALDatasetH) -> c_int;
    pub fn GDALGetRasterBand(hDataset: GDALDatasetH, nBandId: c_int) -> GDALRasterBandH;
    pub fn GDALAddBand(
        hDataset: GDALDatasetH,
        eType: GDALDataType::Type,
        papszOptions: CSLConstList,
    ) -> CPLErr::Type;
    pub fn GDALGetProjectionRef(hDataset: GDALDatasetH) -> *const c_char;
    pub fn GDALSetProjection(hDataset: GDALDatasetH, pszProjection: *const c_char) -> CPLErr::Type;
    #[cfg(major_ge_3)]
    pub fn GDALGetSpatialRef(hDataset: GDALDatasetH) -> OGRSpatialReferenceH;
    #[cfg(major_ge_3)]
    pub fn GDALSetSpatialRef(hDataset: GDALDatasetH, hSRS: OGRSpatialReferenceH) -> CPLErr::Type;
    pub fn GDALGetGeoTransform(
        hDataset: GDALDatasetH,
        padfTransform: *mut c_double,
    ) -> CPLErr::Type;
    pub fn GDALSetGeoTransform(
        hDataset: GDALDatasetH,
        padfTransform: *mut c_double,
    ) -> CPLErr::Type;
    pub fn GDALGetGCPCount(hDataset: GDALDatasetH) -> c_int;
    pub fn GDALBuildOverviews(
        hDataset: GDALDatasetH,
        pszResampling: *const c_char,
        nOverviews: c_int,
        panOverviewList: *const c_int,
        nListBands: c_int,
        panBandList: *const c_int,
        pfnProgress: GDALProgressFunc,
        pProgressData: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALGetAccess(hDataset: GDALDatasetH) -> c_int;
    pub fn GDALFlushCache(hDataset: GDALDatasetH);
    pub fn GDALCreateDatasetMaskBand(hDataset: GDALDatasetH, nFlags: c_int) -> CPLErr::Type;
    pub fn GDALDatasetCopyWholeRaster(
        hSrcDS: GDALDatasetH,
        hDstDS: GDALDatasetH,
        papszOptions: CSLConstList,
        pfnProgress: GDALProgressFunc,
        pProgressData: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALDatasetGetLayerCount(hDS: GDALDatasetH) -> c_int;
    pub fn GDALDatasetGetLayer(hDS: GDALDatasetH, iLayer: c_int) -> OGRLayerH;
    pub fn GDALDatasetGetLayerByName(hDS: GDALDatasetH, pszName: *const c_char) -> OGRLayerH;
    pub fn GDALDatasetCreateLayer(
        hDS: GDALDatasetH,
        pszName: *const c_char,
        hSpatialRef: OGRSpatialReferenceH,
        eGType: OGRwkbGeometryType::Type,
        papszOptions: CSLConstList,
    ) -> OGRLayerH;

    // major object
    pub fn GDALGetDescription(hObject: GDALMajorObjectH) -> *const c_char;
    pub fn GDALSetDescription(hObject: GDALMajorObjectH, pszNewDesc: *const c_char);
    pub fn GDALGetMetadataDomainList(hObject: GDALMajorObjectH) -> *mut *mut c_char;
    pub fn GDALGetMetadata(hObject: GDALMajorObjectH, pszDomain: *const c_char) -> *mut *mut c_char;
    pub fn GDALGetMetadataItem(
        hObject: GDALMajorObjectH,
        pszName: *const c_char,
        pszDomain: *const c_char,
    ) -> *const c_char;
    pub fn GDALSetMetadataItem(
        hObject: GDALMajorObjectH,
        pszName: *const c_char,
        pszValue: *const c_char,
        pszDomain: *const c_char,
    ) -> CPLErr::Type;

    // data types
    pub fn GDALGetDataTypeName(eDataType: GDALDataType::Type) -> *const c_char;
    pub fn GDALGetDataTypeByName(pszName: *const c_char) -> GDALDataType::Type;
    pub fn GDALGetDataTypeSizeBytes(eDataType: GDALDataType::Type) -> c_int;
    pub fn GDALDataTypeIsComplex(eDataType: GDALDataType::Type) -> c_int;
    pub fn GDALDataTypeUnion(
        eType1: GDALDataType::Type,
        eType2: GDALDataType::Type,
    ) -> GDALDataType::Type;

    // color interpretation
    pub fn GDALGetColorInterpretationName(eInterp: GDALColorInterp::Type) -> *const c_char;
    pub fn GDALGetColorInterpretationByName(pszName: *const c_char) -> GDALColorInterp::Type;

    // band
    pub fn GDALGetRasterBandXSize(hBand: GDALRasterBandH) -> c_int;
    pub fn GDALGetRasterBandYSize(hBand: GDALRasterBandH) -> c_int;
    pub fn GDALGetBlockSize(hBand: GDALRasterBandH, pnXSize: *mut c_int, pnYSize: *mut c_int);
    pub fn GDALGetRasterDataType(hBand: GDALRasterBandH) -> GDALDataType::Type;
    pub fn GDALGetBandNumber(hBand: GDALRasterBandH) -> c_int;
    pub fn GDALGetRasterAccess(hBand: GDALRasterBandH) -> GDALAccess::Type;
    pub fn GDALRasterIO(
        hBand: GDALRasterBandH,
        eRWFlag: GDALRWFlag::Type,
        nXOff: c_int,
        nYOff: c_int,
        nXSize: c_int,
        nYSize: c_int,
        pData: *mut c_void,
        nBufXSize: c_int,
        nBufYSize: c_int,
        eBufType: GDALDataType::Type,
        nPixelSpace: c_int,
        nLineSpace: c_int,
    ) -> CPLErr::Type;
    pub fn GDALReadBlock(
        hBand: GDALRasterBandH,
        nXOff: c_int,
        nYOff: c_int,
        pData: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALWriteBlock(
        hBand: GDALRasterBandH,
        nXOff: c_int,
        nYOff: c_int,
        pData: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALGetRasterNoDataValue(hBand: GDALRasterBandH, pbSuccess: *mut c_int) -> c_double;
    pub fn GDALSetRasterNoDataValue(hBand: GDALRasterBandH, dfValue: c_double) -> CPLErr::Type;
    pub fn GDALDeleteRasterNoDataValue(hBand: GDALRasterBandH) -> CPLErr::Type;
    pub fn GDALGetRasterOffset(hBand: GDALRasterBandH, pbSuccess: *mut c_int) -> c_double;
    pub fn GDALSetRasterOffset(hBand: GDALRasterBandH, dfNewOffset: c_double) -> CPLErr::Type;
    pub fn GDALGetRasterScale(hBand: GDALRasterBandH, pbSuccess: *mut c_int) -> c_double;
    pub fn GDALSetRasterScale(hBand: GDALRasterBandH, dfNewScale: c_double) -> CPLErr::Type;
    pub fn GDALGetRasterUnitType(hBand: GDALRasterBandH) -> *const c_char;
    pub fn GDALSetRasterUnitType(
        hBand: GDALRasterBandH,
        pszNewValue: *const c_char,
    ) -> CPLErr::Type;
    pub fn GDALGetRasterMinimum(hBand: GDALRasterBandH, pbSuccess: *mut c_int) -> c_double;
    pub fn GDALGetRasterMaximum(hBand: GDALRasterBandH, pbSuccess: *mut c_int) -> c_double;
    pub fn GDALComputeRasterMinMax(
        hBand: GDALRasterBandH,
        bApproxOK: c_int,
        adfMinMax: *mut c_double,
    );
    pub fn GDALGetRasterStatistics(
        hBand: GDALRasterBandH,
        bApproxOK: c_int,
        bForce: c_int,
        pdfMin: *mut c_double,
        pdfMax: *mut c_double,
        pdfMean: *mut c_double,
        pdfStdDev: *mut c_double,
    ) -> CPLErr::Type;
    pub fn GDALComputeRasterStatistics(
        hBand: GDALRasterBandH,
        bApproxOK: c_int,
        pdfMin: *mut c_double,
        pdfMax: *mut c_double,
        pdfMean: *mut c_double,
        pdfStdDev: *mut c_double,
        pfnProgress: GDALProgressFunc,
        pProgressData: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALSetRasterStatistics(
        hBand: GDALRasterBandH,
        dfMin: c_double,
        dfMax: c_double,
        dfMean: c_double,
        dfStdDev: c_double,
    ) -> CPLErr::Type;
    pub fn GDALGetRasterColorInterpretation(hBand: GDALRasterBandH) -> GDALColorInterp::Type;
    pub fn GDALSetRasterColorInterpretation(
        hBand: GDALRasterBandH,
        eColorInterp: GDALColorInterp::Type,
    ) -> CPLErr::Type;
    pub fn GDALGetOverviewCount(hBand: GDALRasterBandH) -> c_int;
    pub fn GDALGetOverview(hBand: GDALRasterBandH, i: c_int) -> GDALRasterBandH;
    pub fn GDALHasArbitraryOverviews(hBand: GDALRasterBandH) -> c_int;
    pub fn GDALGetMaskBand(hBand: GDALRasterBandH) -> GDALRasterBandH;
    pub fn GDALGetMaskFlags(hBand: GDALRasterBandH) -> c_int;
    pub fn GDALCreateMaskBand(hBand: GDALRasterBandH, nFlags: c_int) -> CPLErr::Type;
    pub fn GDALFillRaster(
        hBand: GDALRasterBandH,
        dfRealValue: c_double,
        dfImaginaryValue: c_double,
    ) -> CPLErr::Type;
    pub fn GDALFlushRasterCache(hBand: GDALRasterBandH) -> CPLErr::Type;
    pub fn GDALRasterBandCopyWholeRaster(
        hSrcBand: GDALRasterBandH,
        hDstBand: GDALRasterBandH,
        papszOptions: CSLConstList,
        pfnProgress: GDALProgressFunc,
        pProgressData: *mut c_void,
    ) -> CPLErr::Type;
    pub fn GDALChecksumImage(
        hBand: GDALRasterBandH,
        nXOff: c_int,
        nYOff: c_int,
        nXSize: c_int,
        nYSize: c_int,
    ) -> c_int;
    pub fn GDALGetRasterCategoryNames(hBand: GDALRasterBandH) -> *mut *mut c_char;
    pub fn GDALSetRasterCategoryNames(
        hBand: GDALRasterBandH,
        papszNames: CSLConstList,
    ) -> CPLErr::Type;
}
