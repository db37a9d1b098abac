use libc::{c_char, c_double, c_int};

use crate::ogr::{OGRCoordinateTransformationH, OGRSpatialReferenceH};
use crate::ogr_enums::OGRErr;
#[cfg(major_ge_3)]
use crate::ogr_enums::OSRAxisMappingStrategy;

// https://gdal.org/api/ogr_srs_api.html

extern "C" {
    pub fn OSRNewSpatialReference(pszWKT: *const c_char) -> OGRSpatialReferenceH;
    pub fn OSRClone(hSRS: OGRSpatialReferenceH) -> OGRSpatialReferenceH;
    pub fn OSRCloneGeogCS(hSRS: OGRSpatialReferenceH) -> OGRSpatialReferenceH;
    pub fn OSRRelease(hSRS: OGRSpatialReferenceH);

    pub fn OSRSetFromUserInput(
        hSRS: OGRSpatialReferenceH,
        pszDefinition: *const c_char,
    ) -> OGRErr::Type;
    pub fn OSRImportFromWkt(
        hSRS: OGRSpatialReferenceH,
        ppszInput: *mut *mut c_char,
    ) -> OGRErr::Type;
    pub fn OSRImportFromEPSG(hSRS: OGRSpatialReferenceH, nCode: c_int) -> OGRErr::Type;
    pub fn OSRImportFromEPSGA(hSRS: OGRSpatialReferenceH, nCode: c_int) -> OGRErr::Type;
    pub fn OSRImportFromProj4(hSRS: OGRSpatialReferenceH, pszProj4: *const c_char) -> OGRErr::Type;
    pub fn OSRImportFromESRI(
        hSRS: OGRSpatialReferenceH,
        papszPrj: *mut *mut c_char,
    ) -> OGRErr::Type;
    pub fn OSRImportFromXML(hSRS: OGRSpatialReferenceH, pszXML: *const c_char) -> OGRErr::Type;

    pub fn OSRExportToWkt(hSRS: OGRSpatialReferenceH, ppszReturn: *mut *mut c_char) -> OGRErr::Type;
    pub fn OSRExportToPrettyWkt(
        hSRS: OGRSpatialReferenceH,
        ppszReturn: *mut *mut c_char,
        bSimplify: c_int,
    ) -> OGRErr::Type;
    pub fn OSRExportToProj4(
        hSRS: OGRSpatialReferenceH,
        ppszReturn: *mut *mut c_char,
    ) -> OGRErr::Type;
    pub fn OSRExportToXML(
        hSRS: OGRSpatialReferenceH,
        ppszRawXML: *mut *mut c_char,
        pszDialect: *const c_char,
    ) -> OGRErr::Type;

    pub fn OSRMorphToESRI(hSRS: OGRSpatialReferenceH) -> OGRErr::Type;
    pub fn OSRMorphFromESRI(hSRS: OGRSpatialReferenceH) -> OGRErr::Type;
    pub fn OSRValidate(hSRS: OGRSpatialReferenceH) -> OGRErr::Type;

    pub fn OSRIsGeographic(hSRS: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsProjected(hSRS: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsLocal(hSRS: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsGeocentric(hSRS: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsVertical(hSRS: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsCompound(hSRS: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsSame(hSRS1: OGRSpatialReferenceH, hSRS2: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsSameGeogCS(hSRS1: OGRSpatialReferenceH, hSRS2: OGRSpatialReferenceH) -> c_int;
    pub fn OSRIsSameVertCS(hSRS1: OGRSpatialReferenceH, hSRS2: OGRSpatialReferenceH) -> c_int;

    pub fn OSRGetAuthorityName(
        hSRS: OGRSpatialReferenceH,
        pszTargetKey: *const c_char,
    ) -> *const c_char;
    pub fn OSRGetAuthorityCode(
        hSRS: OGRSpatialReferenceH,
        pszTargetKey: *const c_char,
    ) -> *const c_char;
    pub fn OSRAutoIdentifyEPSG(hSRS: OGRSpatialReferenceH) -> OGRErr::Type;

    pub fn OSRGetLinearUnits(hSRS: OGRSpatialReferenceH, ppszName: *mut *mut c_char) -> c_double;
    pub fn OSRSetLinearUnits(
        hSRS: OGRSpatialReferenceH,
        pszUnits: *const c_char,
        dfInMeters: c_double,
    ) -> OGRErr::Type;
    pub fn OSRGetAngularUnits(hSRS: OGRSpatialReferenceH, ppszName: *mut *mut c_char) -> c_double;
    pub fn OSRSetAngularUnits(
        hSRS: OGRSpatialReferenceH,
        pszUnits: *const c_char,
        dfInRadians: c_double,
    ) -> OGRErr::Type;
    pub fn OSRGetPrimeMeridian(hSRS: OGRSpatialReferenceH, ppszName: *mut *mut c_char) -> c_double;

    pub fn OSRGetAttrValue(
        hSRS: OGRSpatialReferenceH,
        pszName: *const c_char,
        iChild: c_int,
    ) -> *const c_char;
    pub fn OSRSetAttrValue(
        hSRS: OGRSpatialReferenceH,
        pszNodePath: *const c_char,
        pszNewNodeValue: *const c_char,
    ) -> OGRErr::Type;
    pub fn OSRSetWellKnownGeogCS(
        hSRS: OGRSpatialReferenceH,
        pszName: *const c_char,
    ) -> OGRErr::Type;

    pub fn OSRGetTOWGS84(
        hSRS: OGRSpatialReferenceH,
        padfCoef: *mut c_double,
        nCoeff: c_int,
    ) -> OGRErr::Type;
    pub fn OSRSetTOWGS84(
        hSRS: OGRSpatialReferenceH,
        dfDX: c_double,
        dfDY: c_double,
        dfDZ: c_double,
        dfEX: c_double,
        dfEY: c_double,
        dfEZ: c_double,
        dfPPM: c_double,
    ) -> OGRErr::Type;

    #[cfg(major_ge_3)]
    pub fn OSRGetAxisMappingStrategy(hSRS: OGRSpatialReferenceH) -> OSRAxisMappingStrategy::Type;
    #[cfg(major_ge_3)]
    pub fn OSRSetAxisMappingStrategy(
        hSRS: OGRSpatialReferenceH,
        strategy: OSRAxisMappingStrategy::Type,
    );

    pub fn OCTNewCoordinateTransformation(
        hSourceSRS: OGRSpatialReferenceH,
        hTargetSRS: OGRSpatialReferenceH,
    ) -> OGRCoordinateTransformationH;
    pub fn OCTDestroyCoordinateTransformation(hCT: OGRCoordinateTransformationH);
    pub fn OCTTransform(
        hCT: OGRCoordinateTransformationH,
        nCount: c_int,
        x: *mut c_double,
        y: *mut c_double,
        z: *mut c_double,
    ) -> c_int;
}
