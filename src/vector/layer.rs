use std::ffi::CString;
use std::marker::PhantomData;

use gdal_glue_sys::{self, GDALMajorObjectH, OGRFeatureDefnH, OGRFieldType, OGRLayerH};
use libc::c_int;

use crate::dataset::Dataset;
use crate::errors::*;
use crate::gdal_major_object::MajorObject;
use crate::metadata::Metadata;
use crate::spatial_ref::SpatialRef;
use crate::utils::{_last_null_pointer_err, _ogr_result, _string};
use crate::vector::{Feature, FieldValue, Geometry};

/// Layer in a vector dataset
///
/// The layer belongs to its dataset and lives as long as the borrow of it.
#[derive(Debug)]
pub struct Layer<'a> {
    c_layer: OGRLayerH,
    c_defn: OGRFeatureDefnH,
    phantom: PhantomData<&'a mut Dataset>,
}

impl MajorObject for Layer<'_> {
    unsafe fn gdal_object_ptr(&self) -> GDALMajorObjectH {
        self.c_layer
    }
}

impl Metadata for Layer<'_> {}

impl<'a> Layer<'a> {
    /// # Safety
    /// `c_layer` must be a layer of `_dataset`.
    pub(crate) unsafe fn from_c_layer(_dataset: &'a Dataset, c_layer: OGRLayerH) -> Self {
        let c_defn = gdal_glue_sys::OGR_L_GetLayerDefn(c_layer);
        Self {
            c_layer,
            c_defn,
            phantom: PhantomData,
        }
    }

    /// # Safety
    /// The handle must not outlive `self`.
    pub unsafe fn c_layer(&self) -> OGRLayerH {
        self.c_layer
    }

    pub(crate) fn c_defn(&self) -> OGRFeatureDefnH {
        self.c_defn
    }

    pub fn name(&self) -> String {
        _string(unsafe { gdal_glue_sys::OGR_L_GetName(self.c_layer) })
    }

    /// Number of features, scanning the layer if the driver cannot count
    /// them cheaply.
    pub fn feature_count(&self) -> u64 {
        let count = unsafe { gdal_glue_sys::OGR_L_GetFeatureCount(self.c_layer, 1) };
        count.max(0) as u64
    }

    pub fn field_count(&self) -> usize {
        let count = unsafe { gdal_glue_sys::OGR_FD_GetFieldCount(self.c_defn) };
        count.max(0) as usize
    }

    pub fn field_index(&self, field_name: &str) -> Result<usize> {
        let c_name = CString::new(field_name)?;
        let idx = unsafe { gdal_glue_sys::OGR_FD_GetFieldIndex(self.c_defn, c_name.as_ptr()) };
        if idx < 0 {
            return Err(GdalError::InvalidFieldName {
                field_name: field_name.to_string(),
                method_name: "OGR_FD_GetFieldIndex",
            });
        }
        Ok(idx as usize)
    }

    /// Name and type of every field of the layer.
    pub fn defn_fields(&self) -> Vec<(String, OGRFieldType::Type)> {
        (0..self.field_count())
            .map(|idx| unsafe {
                let c_field_defn = gdal_glue_sys::OGR_FD_GetFieldDefn(self.c_defn, idx as c_int);
                (
                    _string(gdal_glue_sys::OGR_Fld_GetNameRef(c_field_defn)),
                    gdal_glue_sys::OGR_Fld_GetType(c_field_defn),
                )
            })
            .collect()
    }

    /// Adds one field per `(name, type)` pair.
    pub fn create_defn_fields(&self, fields_def: &[(&str, OGRFieldType::Type)]) -> Result<()> {
        for (name, field_type) in fields_def {
            let c_name = CString::new(*name)?;
            let c_field_defn =
                unsafe { gdal_glue_sys::OGR_Fld_Create(c_name.as_ptr(), *field_type) };
            if c_field_defn.is_null() {
                return Err(_last_null_pointer_err("OGR_Fld_Create"));
            }
            let rv = unsafe { gdal_glue_sys::OGR_L_CreateField(self.c_layer, c_field_defn, 1) };
            unsafe { gdal_glue_sys::OGR_Fld_Destroy(c_field_defn) };
            _ogr_result(rv, "OGR_L_CreateField")?;
        }
        Ok(())
    }

    /// Iterate over all features of the layer, from the first one.
    pub fn features(&mut self) -> FeatureIterator<'_> {
        unsafe { gdal_glue_sys::OGR_L_ResetReading(self.c_layer) };
        FeatureIterator {
            c_layer: self.c_layer,
            phantom: PhantomData,
        }
    }

    /// Writes a feature holding a copy of `geometry` and no attributes.
    pub fn create_feature(&mut self, geometry: Geometry) -> Result<()> {
        let mut feature = Feature::new(self)?;
        feature.set_geometry(&geometry)?;
        feature.create(self)
    }

    /// Writes a feature with a geometry and the given attributes.
    ///
    /// `field_names` and `values` are paired by position.
    pub fn create_feature_fields(
        &mut self,
        geometry: Geometry,
        field_names: &[&str],
        values: &[FieldValue],
    ) -> Result<()> {
        if field_names.len() != values.len() {
            return Err(GdalError::BadArgument(format!(
                "{} field names for {} values",
                field_names.len(),
                values.len()
            )));
        }
        let mut feature = Feature::new(self)?;
        feature.set_geometry(&geometry)?;
        for (name, value) in field_names.iter().zip(values) {
            feature.set_field(name, value)?;
        }
        feature.create(self)
    }

    /// A copy of the layer's spatial reference, if it has one.
    pub fn spatial_ref(&self) -> Option<SpatialRef> {
        let c_obj = unsafe { gdal_glue_sys::OGR_L_GetSpatialRef(self.c_layer) };
        if c_obj.is_null() {
            return None;
        }
        unsafe { SpatialRef::from_c_obj(c_obj) }.ok()
    }
}

/// Sequential reader over the features of a [`Layer`].
pub struct FeatureIterator<'a> {
    c_layer: OGRLayerH,
    phantom: PhantomData<&'a mut ()>,
}

impl<'a> Iterator for FeatureIterator<'a> {
    type Item = Feature<'a>;

    #[inline]
    fn next(&mut self) -> Option<Feature<'a>> {
        let c_feature = unsafe { gdal_glue_sys::OGR_L_GetNextFeature(self.c_layer) };
        if c_feature.is_null() {
            None
        } else {
            Some(unsafe { Feature::from_c_feature(c_feature) })
        }
    }
}
