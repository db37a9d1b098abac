use std::ffi::CString;
use std::marker::PhantomData;

use gdal_glue_sys::{self, OGRFeatureH, OGRFieldType};
use libc::c_int;

use crate::errors::*;
use crate::utils::{_last_null_pointer_err, _ogr_result, _string};
use crate::vector::{Geometry, GeometryRef, Layer};

/// The value of a feature attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    IntegerValue(i32),
    Integer64Value(i64),
    RealValue(f64),
    StringValue(String),
}

impl FieldValue {
    /// The value as a string, integers and reals formatted.
    pub fn into_string(self) -> String {
        match self {
            FieldValue::IntegerValue(v) => v.to_string(),
            FieldValue::Integer64Value(v) => v.to_string(),
            FieldValue::RealValue(v) => v.to_string(),
            FieldValue::StringValue(v) => v,
        }
    }

    /// The value as an `i64`, `None` for strings and reals.
    pub fn into_int64(self) -> Option<i64> {
        match self {
            FieldValue::IntegerValue(v) => Some(v as i64),
            FieldValue::Integer64Value(v) => Some(v),
            _ => None,
        }
    }

    /// The value as an `f64`, `None` for strings.
    pub fn into_real(self) -> Option<f64> {
        match self {
            FieldValue::IntegerValue(v) => Some(v as f64),
            FieldValue::Integer64Value(v) => Some(v as f64),
            FieldValue::RealValue(v) => Some(v),
            FieldValue::StringValue(_) => None,
        }
    }

    pub fn ogr_field_type(&self) -> OGRFieldType::Type {
        match self {
            FieldValue::IntegerValue(_) => OGRFieldType::OFTInteger,
            FieldValue::Integer64Value(_) => OGRFieldType::OFTInteger64,
            FieldValue::RealValue(_) => OGRFieldType::OFTReal,
            FieldValue::StringValue(_) => OGRFieldType::OFTString,
        }
    }
}

/// OGR Feature
///
/// Owns its handle; the lifetime ties it to the layer whose definition it uses.
#[derive(Debug)]
pub struct Feature<'a> {
    c_feature: OGRFeatureH,
    _lifetime: PhantomData<&'a ()>,
}

impl<'a> Feature<'a> {
    /// A new, unwritten feature with the fields of `layer`.
    pub fn new(layer: &'a Layer<'_>) -> Result<Feature<'a>> {
        let c_feature = unsafe { gdal_glue_sys::OGR_F_Create(layer.c_defn()) };
        if c_feature.is_null() {
            return Err(_last_null_pointer_err("OGR_F_Create"));
        }
        Ok(unsafe { Feature::from_c_feature(c_feature) })
    }

    /// Takes ownership of `c_feature`.
    ///
    /// # Safety
    /// `c_feature` must be a live feature nobody else destroys.
    pub unsafe fn from_c_feature(c_feature: OGRFeatureH) -> Feature<'a> {
        Feature {
            c_feature,
            _lifetime: PhantomData,
        }
    }

    /// # Safety
    /// The handle must not outlive `self`.
    pub unsafe fn c_feature(&self) -> OGRFeatureH {
        self.c_feature
    }

    /// The feature id, `None` until the feature has been written to a layer.
    pub fn fid(&self) -> Option<u64> {
        let fid = unsafe { gdal_glue_sys::OGR_F_GetFID(self.c_feature) };
        // OGRNullFID is -1
        u64::try_from(fid).ok()
    }

    pub fn geometry(&self) -> Option<GeometryRef<'_>> {
        let c_geom = unsafe { gdal_glue_sys::OGR_F_GetGeometryRef(self.c_feature) };
        if c_geom.is_null() {
            None
        } else {
            Some(unsafe { GeometryRef::from_c_geometry(c_geom) })
        }
    }

    /// Sets a copy of `geometry` as the feature's geometry.
    pub fn set_geometry(&mut self, geometry: &Geometry) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::OGR_F_SetGeometry(self.c_feature, geometry.c_geometry()) };
        _ogr_result(rv, "OGR_F_SetGeometry")
    }

    pub fn field_count(&self) -> usize {
        let count = unsafe { gdal_glue_sys::OGR_F_GetFieldCount(self.c_feature) };
        count.max(0) as usize
    }

    pub fn field_index(&self, field_name: &str) -> Result<usize> {
        let c_name = CString::new(field_name)?;
        let idx = unsafe { gdal_glue_sys::OGR_F_GetFieldIndex(self.c_feature, c_name.as_ptr()) };
        if idx < 0 {
            return Err(GdalError::InvalidFieldName {
                field_name: field_name.to_string(),
                method_name: "OGR_F_GetFieldIndex",
            });
        }
        Ok(idx as usize)
    }

    /// Get the value of a named field. `None` if the field is unset or null.
    ///
    /// Only integer, real and string fields are handled.
    pub fn field(&self, name: &str) -> Result<Option<FieldValue>> {
        let idx = self.field_index(name)?;
        let c_idx = idx as c_int;
        if !self.is_set(c_idx) {
            return Ok(None);
        }
        let field_type = unsafe {
            let c_field_defn = gdal_glue_sys::OGR_F_GetFieldDefnRef(self.c_feature, c_idx);
            gdal_glue_sys::OGR_Fld_GetType(c_field_defn)
        };
        let value = match field_type {
            OGRFieldType::OFTInteger => FieldValue::IntegerValue(unsafe {
                gdal_glue_sys::OGR_F_GetFieldAsInteger(self.c_feature, c_idx)
            }),
            OGRFieldType::OFTInteger64 => FieldValue::Integer64Value(unsafe {
                gdal_glue_sys::OGR_F_GetFieldAsInteger64(self.c_feature, c_idx)
            }),
            OGRFieldType::OFTReal => FieldValue::RealValue(unsafe {
                gdal_glue_sys::OGR_F_GetFieldAsDouble(self.c_feature, c_idx)
            }),
            OGRFieldType::OFTString => {
                let c_str = unsafe { gdal_glue_sys::OGR_F_GetFieldAsString(self.c_feature, c_idx) };
                FieldValue::StringValue(_string(c_str))
            }
            field_type => {
                return Err(GdalError::UnhandledFieldType {
                    field_type,
                    method_name: "OGR_Fld_GetType",
                })
            }
        };
        Ok(Some(value))
    }

    /// The field at `field_idx` read as an `i32`, `None` if unset or null.
    pub fn field_as_integer(&self, field_idx: usize) -> Result<Option<i32>> {
        let c_idx = self.checked_index(field_idx, "OGR_F_GetFieldAsInteger")?;
        if !self.is_set(c_idx) {
            return Ok(None);
        }
        Ok(Some(unsafe { gdal_glue_sys::OGR_F_GetFieldAsInteger(self.c_feature, c_idx) }))
    }

    /// The field at `field_idx` read as an `i64`, `None` if unset or null.
    pub fn field_as_integer64(&self, field_idx: usize) -> Result<Option<i64>> {
        let c_idx = self.checked_index(field_idx, "OGR_F_GetFieldAsInteger64")?;
        if !self.is_set(c_idx) {
            return Ok(None);
        }
        Ok(Some(unsafe { gdal_glue_sys::OGR_F_GetFieldAsInteger64(self.c_feature, c_idx) }))
    }

    /// The field at `field_idx` read as an `f64`, `None` if unset or null.
    pub fn field_as_double(&self, field_idx: usize) -> Result<Option<f64>> {
        let c_idx = self.checked_index(field_idx, "OGR_F_GetFieldAsDouble")?;
        if !self.is_set(c_idx) {
            return Ok(None);
        }
        Ok(Some(unsafe { gdal_glue_sys::OGR_F_GetFieldAsDouble(self.c_feature, c_idx) }))
    }

    /// The field at `field_idx` formatted as a string, `None` if unset or null.
    pub fn field_as_string(&self, field_idx: usize) -> Result<Option<String>> {
        let c_idx = self.checked_index(field_idx, "OGR_F_GetFieldAsString")?;
        if !self.is_set(c_idx) {
            return Ok(None);
        }
        let c_str = unsafe { gdal_glue_sys::OGR_F_GetFieldAsString(self.c_feature, c_idx) };
        Ok(Some(_string(c_str)))
    }

    /// Sets the named field. OGR converts the value to the field's type.
    pub fn set_field(&mut self, field_name: &str, value: &FieldValue) -> Result<()> {
        let c_idx = self.field_index(field_name)? as c_int;
        match value {
            FieldValue::IntegerValue(v) => unsafe {
                gdal_glue_sys::OGR_F_SetFieldInteger(self.c_feature, c_idx, *v as c_int)
            },
            FieldValue::Integer64Value(v) => unsafe {
                gdal_glue_sys::OGR_F_SetFieldInteger64(self.c_feature, c_idx, *v)
            },
            FieldValue::RealValue(v) => unsafe {
                gdal_glue_sys::OGR_F_SetFieldDouble(self.c_feature, c_idx, *v)
            },
            FieldValue::StringValue(v) => {
                let c_value = CString::new(v.as_str())?;
                unsafe {
                    gdal_glue_sys::OGR_F_SetFieldString(self.c_feature, c_idx, c_value.as_ptr())
                };
            }
        }
        Ok(())
    }

    /// Writes the feature to `layer`, which assigns its fid.
    pub fn create(&mut self, layer: &Layer<'_>) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::OGR_L_CreateFeature(layer.c_layer(), self.c_feature) };
        _ogr_result(rv, "OGR_L_CreateFeature")
    }

    fn checked_index(&self, field_idx: usize, method_name: &'static str) -> Result<c_int> {
        if field_idx >= self.field_count() {
            return Err(GdalError::InvalidFieldIndex {
                index: field_idx,
                method_name,
            });
        }
        Ok(field_idx as c_int)
    }

    fn is_set(&self, c_idx: c_int) -> bool {
        unsafe { gdal_glue_sys::OGR_F_IsFieldSetAndNotNull(self.c_feature, c_idx) != 0 }
    }
}

impl Drop for Feature<'_> {
    fn drop(&mut self) {
        unsafe { gdal_glue_sys::OGR_F_Destroy(self.c_feature) };
    }
}
