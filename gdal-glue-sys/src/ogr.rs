use libc::{c_char, c_double, c_int, c_uchar, c_void};

use crate::ogr_enums::*;
use crate::ogr_structs::{OGREnvelope, OGREnvelope3D};
use crate::GIntBig;

pub type OGRGeometryH = *mut c_void;
pub type OGRSpatialReferenceH = *mut c_void;
pub type OGRCoordinateTransformationH = *mut c_void;
pub type OGRLayerH = *mut c_void;
pub type OGRFeatureH = *mut c_void;
pub type OGRFeatureDefnH = *mut c_void;
pub type OGRFieldDefnH = *mut c_void;

/// FID of a feature that has not been written to a layer.
pub const OGRNullFID: GIntBig = -1;

// GDAL 2.3.0 turned the input buffer of the two WKB readers into `const void *`.
#[cfg(any(major_ge_3, all(major_is_2, minor_ge_3)))]
extern "C" {
    pub fn OGR_G_CreateFromWkb(
        pabyData: *const c_void,
        hSRS: OGRSpatialReferenceH,
        phGeometry: *mut OGRGeometryH,
        nBytes: c_int,
    ) -> OGRErr::Type;
    pub fn OGR_G_ImportFromWkb(
        hGeom: OGRGeometryH,
        pabyData: *const c_void,
        nSize: c_int,
    ) -> OGRErr::Type;
}

#[cfg(not(any(major_ge_3, all(major_is_2, minor_ge_3))))]
extern "C" {
    pub fn OGR_G_CreateFromWkb(
        pabyData: *mut c_uchar,
        hSRS: OGRSpatialReferenceH,
        phGeometry: *mut OGRGeometryH,
        nBytes: c_int,
    ) -> OGRErr::Type;
    pub fn OGR_G_ImportFromWkb(
        hGeom: OGRGeometryH,
        pabyData: *mut c_uchar,
        nSize: c_int,
    ) -> OGRErr::Type;
}

extern "C" {
    // geometry
    pub fn OGR_G_ExportToWkb(
        hGeom: OGRGeometryH,
        eOrder: OGRwkbByteOrder::Type,
        pabyDstBuffer: *mut c_uchar,
    ) -> OGRErr::Type;
    pub fn OGR_G_WkbSize(hGeom: OGRGeometryH) -> c_int;
    pub fn OGR_G_CreateFromWkt(
        ppszData: *mut *mut c_char,
        hSRS: OGRSpatialReferenceH,
        phGeometry: *mut OGRGeometryH,
    ) -> OGRErr::Type;
    pub fn OGR_G_CreateGeometry(eGeometryType: OGRwkbGeometryType::Type) -> OGRGeometryH;
    pub fn OGR_G_DestroyGeometry(hGeom: OGRGeometryH);
    pub fn OGR_G_Clone(hGeom: OGRGeometryH) -> OGRGeometryH;
    pub fn OGR_G_ExportToWkt(hGeom: OGRGeometryH, ppszSrcText: *mut *mut c_char) -> OGRErr::Type;
    pub fn OGR_G_ExportToJson(hGeom: OGRGeometryH) -> *mut c_char;
    pub fn OGR_G_GetGeometryType(hGeom: OGRGeometryH) -> OGRwkbGeometryType::Type;
    pub fn OGR_G_GetGeometryName(hGeom: OGRGeometryH) -> *const c_char;
    pub fn OGR_G_IsEmpty(hGeom: OGRGeometryH) -> c_int;
    pub fn OGR_G_Area(hGeom: OGRGeometryH) -> c_double;
    pub fn OGR_G_GetPointCount(hGeom: OGRGeometryH) -> c_int;
    pub fn OGR_G_GetPoint(
        hGeom: OGRGeometryH,
        i: c_int,
        pdfX: *mut c_double,
        pdfY: *mut c_double,
        pdfZ: *mut c_double,
    );
    pub fn OGR_G_AddPoint(hGeom: OGRGeometryH, dfX: c_double, dfY: c_double, dfZ: c_double);
    pub fn OGR_G_AddPoint_2D(hGeom: OGRGeometryH, dfX: c_double, dfY: c_double);
    pub fn OGR_G_GetEnvelope(hGeom: OGRGeometryH, psEnvelope: *mut OGREnvelope);
    pub fn OGR_G_GetEnvelope3D(hGeom: OGRGeometryH, psEnvelope: *mut OGREnvelope3D);
    pub fn OGR_G_GetSpatialReference(hGeom: OGRGeometryH) -> OGRSpatialReferenceH;
    pub fn OGR_G_AssignSpatialReference(hGeom: OGRGeometryH, hSRS: OGRSpatialReferenceH);
    pub fn OGR_G_Transform(
        hGeom: OGRGeometryH,
        hTransform: OGRCoordinateTransformationH,
    ) -> OGRErr::Type;
    pub fn OGR_G_Equals(hGeom: OGRGeometryH, hOther: OGRGeometryH) -> c_int;
    pub fn OGR_G_GetGeometryCount(hGeom: OGRGeometryH) -> c_int;
    pub fn OGR_G_GetGeometryRef(hGeom: OGRGeometryH, iSubGeom: c_int) -> OGRGeometryH;
    pub fn OGR_G_AddGeometry(hGeom: OGRGeometryH, hNewSubGeom: OGRGeometryH) -> OGRErr::Type;

    // layer
    pub fn OGR_L_GetName(hLayer: OGRLayerH) -> *const c_char;
    pub fn OGR_L_GetFeatureCount(hLayer: OGRLayerH, bForce: c_int) -> GIntBig;
    pub fn OGR_L_GetLayerDefn(hLayer: OGRLayerH) -> OGRFeatureDefnH;
    pub fn OGR_L_ResetReading(hLayer: OGRLayerH);
    pub fn OGR_L_GetNextFeature(hLayer: OGRLayerH) -> OGRFeatureH;
    pub fn OGR_L_CreateFeature(hLayer: OGRLayerH, hFeat: OGRFeatureH) -> OGRErr::Type;
    pub fn OGR_L_CreateField(
        hLayer: OGRLayerH,
        hField: OGRFieldDefnH,
        bApproxOK: c_int,
    ) -> OGRErr::Type;
    pub fn OGR_L_GetSpatialRef(hLayer: OGRLayerH) -> OGRSpatialReferenceH;

    // feature definition
    pub fn OGR_FD_GetFieldCount(hDefn: OGRFeatureDefnH) -> c_int;
    pub fn OGR_FD_GetFieldDefn(hDefn: OGRFeatureDefnH, iField: c_int) -> OGRFieldDefnH;
    pub fn OGR_FD_GetFieldIndex(hDefn: OGRFeatureDefnH, pszFieldName: *const c_char) -> c_int;

    // field definition
    pub fn OGR_Fld_Create(pszName: *const c_char, eType: OGRFieldType::Type) -> OGRFieldDefnH;
    pub fn OGR_Fld_Destroy(hDefn: OGRFieldDefnH);
    pub fn OGR_Fld_GetNameRef(hDefn: OGRFieldDefnH) -> *const c_char;
    pub fn OGR_Fld_GetType(hDefn: OGRFieldDefnH) -> OGRFieldType::Type;

    // feature
    pub fn OGR_F_Create(hDefn: OGRFeatureDefnH) -> OGRFeatureH;
    pub fn OGR_F_Destroy(hFeat: OGRFeatureH);
    pub fn OGR_F_GetFID(hFeat: OGRFeatureH) -> GIntBig;
    pub fn OGR_F_GetGeometryRef(hFeat: OGRFeatureH) -> OGRGeometryH;
    pub fn OGR_F_SetGeometry(hFeat: OGRFeatureH, hGeom: OGRGeometryH) -> OGRErr::Type;
    pub fn OGR_F_GetFieldCount(hFeat: OGRFeatureH) -> c_int;
    pub fn OGR_F_GetFieldIndex(hFeat: OGRFeatureH, pszName: *const c_char) -> c_int;
    pub fn OGR_F_GetFieldDefnRef(hFeat: OGRFeatureH, i: c_int) -> OGRFieldDefnH;
    pub fn OGR_F_IsFieldSetAndNotNull(hFeat: OGRFeatureH, iField: c_int) -> c_int;
    pub fn OGR_F_GetFieldAsInteger(hFeat: OGRFeatureH, iField: c_int) -> c_int;
    pub fn OGR_F_GetFieldAsInteger64(hFeat: OGRFeatureH, iField: c_int) -> GIntBig;
    pub fn OGR_F_GetFieldAsDouble(hFeat: OGRFeatureH, iField: c_int) -> c_double;
    pub fn OGR_F_GetFieldAsString(hFeat: OGRFeatureH, iField: c_int) -> *const c_char;
    pub fn OGR_F_SetFieldInteger(hFeat: OGRFeatureH, iField: c_int, nValue: c_int);
    pub fn OGR_F_SetFieldInteger64(hFeat: OGRFeatureH, iField: c_int, nValue: GIntBig);
    pub fn OGR_F_SetFieldDouble(hFeat: OGRFeatureH, iField: c_int, dfValue: c_double);
    pub fn OGR_F_SetFieldString(hFeat: OGRFeatureH, iField: c_int, pszValue: *const c_char);
}
