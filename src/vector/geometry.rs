use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr;

use gdal_glue_sys::{
    self, OGREnvelope, OGREnvelope3D, OGRGeometryH, OGRwkbByteOrder, OGRwkbGeometryType,
};
use libc::{c_char, c_double, c_int};

use crate::errors::*;
use crate::spatial_ref::{CoordTransform, SpatialRef};
use crate::utils::{_last_null_pointer_err, _ogr_result, _string, _string_owned};
use crate::vector::{Envelope, Envelope3D};
use crate::wkb;

/// Byte order of serialized WKB.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WkbByteOrder {
    /// Big endian.
    Xdr,
    /// Little endian.
    Ndr,
}

impl WkbByteOrder {
    fn c_order(self) -> OGRwkbByteOrder::Type {
        match self {
            WkbByteOrder::Xdr => OGRwkbByteOrder::wkbXDR,
            WkbByteOrder::Ndr => OGRwkbByteOrder::wkbNDR,
        }
    }
}

/// OGR Geometry
///
/// A geometry either owns its handle or borrows it from a feature or a
/// parent geometry; borrowed geometries are handed out as [`GeometryRef`].
pub struct Geometry {
    c_geometry: OGRGeometryH,
    owned: bool,
}

impl Geometry {
    /// Wraps a handle. With `owned` the handle is destroyed on drop.
    ///
    /// # Safety
    /// `c_geometry` must be a live geometry. When not `owned`, it must
    /// outlive the returned value.
    pub unsafe fn with_c_geometry(c_geometry: OGRGeometryH, owned: bool) -> Geometry {
        Geometry { c_geometry, owned }
    }

    /// An empty geometry of type `geom_type`.
    pub fn empty(geom_type: OGRwkbGeometryType::Type) -> Result<Geometry> {
        let c_geom = unsafe { gdal_glue_sys::OGR_G_CreateGeometry(geom_type) };
        if c_geom.is_null() {
            return Err(_last_null_pointer_err("OGR_G_CreateGeometry"));
        }
        Ok(unsafe { Geometry::with_c_geometry(c_geom, true) })
    }

    /// Create a geometry by parsing a
    /// [WKT](https://en.wikipedia.org/wiki/Well-known_text) string.
    pub fn from_wkt(wkt: &str) -> Result<Geometry> {
        let c_wkt = CString::new(wkt)?;
        // OGR_G_CreateFromWkt advances the pointer, so hand it a copy.
        let mut c_wkt_ptr = c_wkt.as_ptr() as *mut c_char;
        let mut c_geom = ptr::null_mut();
        let rv = unsafe {
            gdal_glue_sys::OGR_G_CreateFromWkt(&mut c_wkt_ptr, ptr::null_mut(), &mut c_geom)
        };
        _ogr_result(rv, "OGR_G_CreateFromWkt")?;
        Ok(unsafe { Geometry::with_c_geometry(c_geom, true) })
    }

    /// Create a geometry from its
    /// [WKB](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry#Well-known_binary)
    /// serialization. The byte order is read from the buffer.
    pub fn from_wkb(wkb: &[u8]) -> Result<Geometry> {
        let n_bytes = wkb_len(wkb)?;
        let mut c_geom = ptr::null_mut();
        let rv = unsafe {
            wkb::create_from_wkb(wkb.as_ptr().cast(), ptr::null_mut(), &mut c_geom, n_bytes)
        };
        _ogr_result(rv, "OGR_G_CreateFromWkb")?;
        Ok(unsafe { Geometry::with_c_geometry(c_geom, true) })
    }

    /// Replaces the content of `self` with the geometry serialized in `wkb`.
    ///
    /// The serialized geometry must be of the same type as `self`.
    pub fn set_from_wkb(&mut self, wkb: &[u8]) -> Result<()> {
        let n_bytes = wkb_len(wkb)?;
        let rv = unsafe { wkb::import_from_wkb(self.c_geometry, wkb.as_ptr().cast(), n_bytes) };
        _ogr_result(rv, "OGR_G_ImportFromWkb")
    }

    /// Serializes the geometry to WKB.
    pub fn wkb(&self, byte_order: WkbByteOrder) -> Result<Vec<u8>> {
        let mut wkb = vec![0u8; self.wkb_size()];
        let rv = unsafe {
            wkb::export_to_wkb(self.c_geometry, byte_order.c_order(), wkb.as_mut_ptr())
        };
        _ogr_result(rv, "OGR_G_ExportToWkb")?;
        Ok(wkb)
    }

    /// Size in bytes of the WKB serialization.
    pub fn wkb_size(&self) -> usize {
        let size = unsafe { gdal_glue_sys::OGR_G_WkbSize(self.c_geometry) };
        size.max(0) as usize
    }

    /// Serialize the geometry as WKT.
    pub fn wkt(&self) -> Result<String> {
        let mut c_wkt = ptr::null_mut();
        let rv = unsafe { gdal_glue_sys::OGR_G_ExportToWkt(self.c_geometry, &mut c_wkt) };
        _ogr_result(rv, "OGR_G_ExportToWkt")?;
        Ok(_string_owned(c_wkt))
    }

    /// Serialize the geometry as GeoJSON.
    pub fn json(&self) -> Result<String> {
        let c_json = unsafe { gdal_glue_sys::OGR_G_ExportToJson(self.c_geometry) };
        if c_json.is_null() {
            return Err(_last_null_pointer_err("OGR_G_ExportToJson"));
        }
        Ok(_string_owned(c_json))
    }

    pub fn geometry_type(&self) -> OGRwkbGeometryType::Type {
        unsafe { gdal_glue_sys::OGR_G_GetGeometryType(self.c_geometry) }
    }

    /// The WKT name of the geometry type, such as `POLYGON`.
    pub fn geometry_name(&self) -> String {
        _string(unsafe { gdal_glue_sys::OGR_G_GetGeometryName(self.c_geometry) })
    }

    pub fn is_empty(&self) -> bool {
        unsafe { gdal_glue_sys::OGR_G_IsEmpty(self.c_geometry) == 1 }
    }

    /// Area of a surface, `0.0` for other geometry types.
    pub fn area(&self) -> f64 {
        unsafe { gdal_glue_sys::OGR_G_Area(self.c_geometry) }
    }

    /// Number of vertices of a point or curve.
    pub fn point_count(&self) -> usize {
        let count = unsafe { gdal_glue_sys::OGR_G_GetPointCount(self.c_geometry) };
        count.max(0) as usize
    }

    /// Returns the vertex at `index` as `(x, y, z)`, `z` being `0.0` for 2D geometries.
    pub fn get_point(&self, index: i32) -> (f64, f64, f64) {
        let mut x: c_double = 0.;
        let mut y: c_double = 0.;
        let mut z: c_double = 0.;
        unsafe {
            gdal_glue_sys::OGR_G_GetPoint(self.c_geometry, index as c_int, &mut x, &mut y, &mut z)
        };
        (x, y, z)
    }

    /// Appends a vertex to a point or curve.
    pub fn add_point(&mut self, (x, y, z): (f64, f64, f64)) {
        unsafe {
            gdal_glue_sys::OGR_G_AddPoint(
                self.c_geometry,
                x as c_double,
                y as c_double,
                z as c_double,
            )
        };
    }

    pub fn add_point_2d(&mut self, (x, y): (f64, f64)) {
        unsafe { gdal_glue_sys::OGR_G_AddPoint_2D(self.c_geometry, x as c_double, y as c_double) };
    }

    /// Number of direct children of a polygon or collection.
    pub fn geometry_count(&self) -> usize {
        let count = unsafe { gdal_glue_sys::OGR_G_GetGeometryCount(self.c_geometry) };
        count.max(0) as usize
    }

    /// Borrows the child at `index`: a ring of a polygon (exterior first)
    /// or a member of a collection.
    pub fn get_geometry(&self, index: usize) -> Result<GeometryRef<'_>> {
        let count = self.geometry_count();
        if index >= count {
            return Err(GdalError::BadArgument(format!(
                "geometry index {index} out of range, geometry has {count} children"
            )));
        }
        let c_geom =
            unsafe { gdal_glue_sys::OGR_G_GetGeometryRef(self.c_geometry, index as c_int) };
        if c_geom.is_null() {
            return Err(_last_null_pointer_err("OGR_G_GetGeometryRef"));
        }
        Ok(unsafe { GeometryRef::from_c_geometry(c_geom) })
    }

    /// Adds a copy of `sub_geometry` as a child of a polygon or collection.
    pub fn add_geometry(&mut self, sub_geometry: &Geometry) -> Result<()> {
        let rv =
            unsafe { gdal_glue_sys::OGR_G_AddGeometry(self.c_geometry, sub_geometry.c_geometry) };
        _ogr_result(rv, "OGR_G_AddGeometry")
    }

    pub fn envelope(&self) -> Envelope {
        let mut c_envelope = OGREnvelope::default();
        unsafe { gdal_glue_sys::OGR_G_GetEnvelope(self.c_geometry, &mut c_envelope) };
        c_envelope.into()
    }

    pub fn envelope_3d(&self) -> Envelope3D {
        let mut c_envelope = OGREnvelope3D::default();
        unsafe { gdal_glue_sys::OGR_G_GetEnvelope3D(self.c_geometry, &mut c_envelope) };
        c_envelope.into()
    }

    /// A copy of the spatial reference assigned to the geometry, if any.
    pub fn spatial_ref(&self) -> Option<SpatialRef> {
        let c_spatial_ref = unsafe { gdal_glue_sys::OGR_G_GetSpatialReference(self.c_geometry) };
        if c_spatial_ref.is_null() {
            None
        } else {
            unsafe { SpatialRef::from_c_obj(c_spatial_ref) }.ok()
        }
    }

    /// Assigns `spatial_ref` without reprojecting. OGR keeps its own reference.
    pub fn set_spatial_ref(&mut self, spatial_ref: &SpatialRef) {
        unsafe {
            gdal_glue_sys::OGR_G_AssignSpatialReference(self.c_geometry, spatial_ref.to_c_hsrs())
        };
    }

    /// Reprojects the geometry in place.
    pub fn transform_inplace(&mut self, htransform: &CoordTransform) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::OGR_G_Transform(self.c_geometry, htransform.to_c_hct()) };
        _ogr_result(rv, "OGR_G_Transform")
    }

    /// Returns the wrapped handle, still owned by `self`.
    ///
    /// # Safety
    /// The handle must not outlive `self`.
    pub unsafe fn c_geometry(&self) -> OGRGeometryH {
        self.c_geometry
    }
}

fn wkb_len(wkb: &[u8]) -> Result<c_int> {
    c_int::try_from(wkb.len()).map_err(|_| {
        GdalError::BadArgument(format!("WKB buffer of {} bytes is too large", wkb.len()))
    })
}

impl Drop for Geometry {
    fn drop(&mut self) {
        if self.owned {
            unsafe { gdal_glue_sys::OGR_G_DestroyGeometry(self.c_geometry) };
        }
    }
}

impl Clone for Geometry {
    /// Deep copy; the clone is always owned.
    fn clone(&self) -> Geometry {
        let c_geom = unsafe { gdal_glue_sys::OGR_G_Clone(self.c_geometry) };
        unsafe { Geometry::with_c_geometry(c_geom, true) }
    }
}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        unsafe { gdal_glue_sys::OGR_G_Equals(self.c_geometry, other.c_geometry) != 0 }
    }
}

impl Debug for Geometry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.wkt() {
            Ok(wkt) => f.write_str(&wkt),
            Err(_) => write!(f, "{} (not serializable)", self.geometry_name()),
        }
    }
}

/// A geometry borrowed from a feature or a parent geometry.
pub struct GeometryRef<'a> {
    geom: Geometry,
    _lifetime: PhantomData<&'a ()>,
}

impl<'a> GeometryRef<'a> {
    /// # Safety
    /// `c_geometry` must be a live geometry owned by something living for `'a`.
    pub(crate) unsafe fn from_c_geometry(c_geometry: OGRGeometryH) -> GeometryRef<'a> {
        GeometryRef {
            geom: Geometry::with_c_geometry(c_geometry, false),
            _lifetime: PhantomData,
        }
    }
}

impl Deref for GeometryRef<'_> {
    type Target = Geometry;

    fn deref(&self) -> &Self::Target {
        &self.geom
    }
}

impl Debug for GeometryRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.geom, f)
    }
}
