use std::ffi::CString;
use std::fmt::{Debug, Formatter};
use std::ptr;
use std::str::FromStr;

use gdal_glue_sys::{self, OGRErr, OGRSpatialReferenceH};
use libc::{c_char, c_int};

use crate::errors::*;
use crate::utils::{_last_null_pointer_err, _ogr_result, _string, _string_owned};

/// A spatial reference system, released with `OSRRelease` on drop.
///
/// `SpatialRef` values compare equal when `OSRIsSame` holds.
pub struct SpatialRef(OGRSpatialReferenceH);

// OSR objects are reference counted without thread affinity.
unsafe impl Send for SpatialRef {}

impl Drop for SpatialRef {
    fn drop(&mut self) {
        unsafe { gdal_glue_sys::OSRRelease(self.0) };
        self.0 = ptr::null_mut();
    }
}

impl Clone for SpatialRef {
    fn clone(&self) -> SpatialRef {
        let n_obj = unsafe { gdal_glue_sys::OSRClone(self.0) };
        SpatialRef(n_obj)
    }
}

impl PartialEq for SpatialRef {
    fn eq(&self, other: &SpatialRef) -> bool {
        unsafe { gdal_glue_sys::OSRIsSame(self.0, other.0) == 1 }
    }
}

impl Debug for SpatialRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = self
            .authority()
            .or_else(|_| self.to_proj4())
            .unwrap_or_else(|_| "<empty>".to_string());
        f.debug_tuple("SpatialRef").field(&description).finish()
    }
}

/// How the axes of a geographic or projected CRS map to `x`/`y` when
/// transforming coordinates.
#[cfg(major_ge_3)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMappingStrategy {
    /// Longitude/easting first, whatever the authority says.
    TraditionalGisOrder,
    /// The axis order of the authority definition, e.g. latitude first for EPSG:4326.
    AuthorityCompliant,
    Custom,
}

#[cfg(major_ge_3)]
impl AxisMappingStrategy {
    fn c_strategy(self) -> gdal_glue_sys::OSRAxisMappingStrategy::Type {
        use gdal_glue_sys::OSRAxisMappingStrategy::*;
        match self {
            AxisMappingStrategy::TraditionalGisOrder => OAMS_TRADITIONAL_GIS_ORDER,
            AxisMappingStrategy::AuthorityCompliant => OAMS_AUTHORITY_COMPLIANT,
            AxisMappingStrategy::Custom => OAMS_CUSTOM,
        }
    }

    fn from_c_strategy(strategy: gdal_glue_sys::OSRAxisMappingStrategy::Type) -> Self {
        use gdal_glue_sys::OSRAxisMappingStrategy::*;
        match strategy {
            OAMS_TRADITIONAL_GIS_ORDER => AxisMappingStrategy::TraditionalGisOrder,
            OAMS_AUTHORITY_COMPLIANT => AxisMappingStrategy::AuthorityCompliant,
            _ => AxisMappingStrategy::Custom,
        }
    }
}

impl SpatialRef {
    /// An empty spatial reference.
    pub fn new() -> Result<SpatialRef> {
        let c_obj = unsafe { gdal_glue_sys::OSRNewSpatialReference(ptr::null()) };
        if c_obj.is_null() {
            return Err(_last_null_pointer_err("OSRNewSpatialReference"));
        }
        Ok(SpatialRef(c_obj))
    }

    /// Takes a new reference on `c_obj` by cloning it.
    ///
    /// # Safety
    /// `c_obj` must be a live `OGRSpatialReferenceH`.
    pub unsafe fn from_c_obj(c_obj: OGRSpatialReferenceH) -> Result<SpatialRef> {
        let mut_c_obj = gdal_glue_sys::OSRClone(c_obj);
        if mut_c_obj.is_null() {
            Err(_last_null_pointer_err("OSRClone"))
        } else {
            Ok(SpatialRef(mut_c_obj))
        }
    }

    /// Any definition `OSRSetFromUserInput` understands: WKT, `EPSG:n`, PROJ
    /// strings, `WGS84`, file names, URNs.
    pub fn from_definition(definition: &str) -> Result<SpatialRef> {
        let c_str = CString::new(definition)?;
        let srs = Self::new()?;
        let rv = unsafe { gdal_glue_sys::OSRSetFromUserInput(srs.0, c_str.as_ptr()) };
        _ogr_result(rv, "OSRSetFromUserInput")?;
        Ok(srs)
    }

    pub fn from_wkt(wkt: &str) -> Result<SpatialRef> {
        let c_str = CString::new(wkt)?;
        let srs = Self::new()?;
        // GDAL advances the pointer past the parsed text but never writes through it
        let mut c_wkt = c_str.as_ptr() as *mut c_char;
        let rv = unsafe { gdal_glue_sys::OSRImportFromWkt(srs.0, &mut c_wkt) };
        _ogr_result(rv, "OSRImportFromWkt")?;
        Ok(srs)
    }

    pub fn from_epsg(epsg_code: u32) -> Result<SpatialRef> {
        let code = epsg_code_c_int(epsg_code)?;
        let srs = Self::new()?;
        let rv = unsafe { gdal_glue_sys::OSRImportFromEPSG(srs.0, code) };
        _ogr_result(rv, "OSRImportFromEPSG")?;
        Ok(srs)
    }

    /// Like [`SpatialRef::from_epsg`], keeping the axis order of the EPSG
    /// database on GDAL 2 as well.
    pub fn from_epsga(epsg_code: u32) -> Result<SpatialRef> {
        let code = epsg_code_c_int(epsg_code)?;
        let srs = Self::new()?;
        let rv = unsafe { gdal_glue_sys::OSRImportFromEPSGA(srs.0, code) };
        _ogr_result(rv, "OSRImportFromEPSGA")?;
        Ok(srs)
    }

    pub fn from_proj4(proj4_string: &str) -> Result<SpatialRef> {
        let c_str = CString::new(proj4_string)?;
        let srs = Self::new()?;
        let rv = unsafe { gdal_glue_sys::OSRImportFromProj4(srs.0, c_str.as_ptr()) };
        _ogr_result(rv, "OSRImportFromProj4")?;
        Ok(srs)
    }

    /// Reads an ESRI `.prj` definition.
    pub fn from_esri(esri_wkt: &str) -> Result<SpatialRef> {
        let c_str = CString::new(esri_wkt)?;
        let mut ptrs = [c_str.as_ptr() as *mut c_char, ptr::null_mut()];
        let srs = Self::new()?;
        let rv = unsafe { gdal_glue_sys::OSRImportFromESRI(srs.0, ptrs.as_mut_ptr()) };
        _ogr_result(rv, "OSRImportFromESRI")?;
        Ok(srs)
    }

    /// Reads the GML/XML dialect `OSRExportToXML` writes.
    pub fn from_xml(xml: &str) -> Result<SpatialRef> {
        let c_str = CString::new(xml)?;
        let srs = Self::new()?;
        let rv = unsafe { gdal_glue_sys::OSRImportFromXML(srs.0, c_str.as_ptr()) };
        _ogr_result(rv, "OSRImportFromXML")?;
        Ok(srs)
    }

    pub fn to_wkt(&self) -> Result<String> {
        let mut c_wkt = ptr::null_mut();
        let rv = unsafe { gdal_glue_sys::OSRExportToWkt(self.0, &mut c_wkt) };
        let wkt = _string_owned(c_wkt);
        _ogr_result(rv, "OSRExportToWkt")?;
        Ok(wkt)
    }

    /// Indented multi-line WKT. `simplify` drops `AUTHORITY` and `AXIS` nodes.
    pub fn to_pretty_wkt(&self, simplify: bool) -> Result<String> {
        let mut c_wkt = ptr::null_mut();
        let rv = unsafe {
            gdal_glue_sys::OSRExportToPrettyWkt(self.0, &mut c_wkt, simplify as c_int)
        };
        let wkt = _string_owned(c_wkt);
        _ogr_result(rv, "OSRExportToPrettyWkt")?;
        Ok(wkt)
    }

    pub fn to_proj4(&self) -> Result<String> {
        let mut c_proj4 = ptr::null_mut();
        let rv = unsafe { gdal_glue_sys::OSRExportToProj4(self.0, &mut c_proj4) };
        let proj4 = _string_owned(c_proj4);
        _ogr_result(rv, "OSRExportToProj4")?;
        Ok(proj4)
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut c_xml = ptr::null_mut();
        let rv = unsafe { gdal_glue_sys::OSRExportToXML(self.0, &mut c_xml, ptr::null()) };
        let xml = _string_owned(c_xml);
        _ogr_result(rv, "OSRExportToXML")?;
        Ok(xml)
    }

    /// Rewrites the definition with ESRI names, for writing `.prj` files.
    pub fn morph_to_esri(&mut self) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::OSRMorphToESRI(self.0) };
        _ogr_result(rv, "OSRMorphToESRI")
    }

    pub fn morph_from_esri(&mut self) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::OSRMorphFromESRI(self.0) };
        _ogr_result(rv, "OSRMorphFromESRI")
    }

    /// Checks the definition against the OGC rules, `OGRERR_CORRUPT_DATA` or
    /// `OGRERR_UNSUPPORTED_SRS` come back unchanged.
    pub fn validate(&self) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::OSRValidate(self.0) };
        _ogr_result(rv, "OSRValidate")
    }

    pub fn is_geographic(&self) -> bool {
        unsafe { gdal_glue_sys::OSRIsGeographic(self.0) == 1 }
    }

    pub fn is_projected(&self) -> bool {
        unsafe { gdal_glue_sys::OSRIsProjected(self.0) == 1 }
    }

    pub fn is_local(&self) -> bool {
        unsafe { gdal_glue_sys::OSRIsLocal(self.0) == 1 }
    }

    pub fn is_geocentric(&self) -> bool {
        unsafe { gdal_glue_sys::OSRIsGeocentric(self.0) == 1 }
    }

    pub fn is_vertical(&self) -> bool {
        unsafe { gdal_glue_sys::OSRIsVertical(self.0) == 1 }
    }

    pub fn is_compound(&self) -> bool {
        unsafe { gdal_glue_sys::OSRIsCompound(self.0) == 1 }
    }

    pub fn is_same(&self, other: &SpatialRef) -> bool {
        self == other
    }

    pub fn is_same_geog_cs(&self, other: &SpatialRef) -> bool {
        unsafe { gdal_glue_sys::OSRIsSameGeogCS(self.0, other.0) == 1 }
    }

    pub fn is_same_vert_cs(&self, other: &SpatialRef) -> bool {
        unsafe { gdal_glue_sys::OSRIsSameVertCS(self.0, other.0) == 1 }
    }

    pub fn auth_name(&self) -> Result<String> {
        let c_ptr = unsafe { gdal_glue_sys::OSRGetAuthorityName(self.0, ptr::null()) };
        if c_ptr.is_null() {
            Err(_last_null_pointer_err("OSRGetAuthorityName"))
        } else {
            Ok(_string(c_ptr))
        }
    }

    pub fn auth_code(&self) -> Result<i32> {
        let c_ptr = unsafe { gdal_glue_sys::OSRGetAuthorityCode(self.0, ptr::null()) };
        if c_ptr.is_null() {
            return Err(_last_null_pointer_err("OSRGetAuthorityCode"));
        }
        let c_str = _string(c_ptr);
        i32::from_str(&c_str).map_err(|_| GdalError::OgrError {
            err: OGRErr::OGRERR_UNSUPPORTED_SRS,
            method_name: "OSRGetAuthorityCode",
        })
    }

    /// `AUTHORITY:CODE`, e.g. `EPSG:4326`.
    pub fn authority(&self) -> Result<String> {
        let c_ptr = unsafe { gdal_glue_sys::OSRGetAuthorityName(self.0, ptr::null()) };
        if c_ptr.is_null() {
            return Err(_last_null_pointer_err("OSRGetAuthorityName"));
        }
        let name = _string(c_ptr);
        let c_ptr = unsafe { gdal_glue_sys::OSRGetAuthorityCode(self.0, ptr::null()) };
        if c_ptr.is_null() {
            return Err(_last_null_pointer_err("OSRGetAuthorityCode"));
        }
        let code = _string(c_ptr);
        Ok(format!("{name}:{code}"))
    }

    /// Sets the authority code of the root node by looking the definition up
    /// in the EPSG database.
    pub fn auto_identify_epsg(&mut self) -> Result<()> {
        let rv = unsafe { gdal_glue_sys::OSRAutoIdentifyEPSG(self.0) };
        _ogr_result(rv, "OSRAutoIdentifyEPSG")
    }

    /// Size of one linear unit in meters.
    pub fn linear_units(&self) -> f64 {
        unsafe { gdal_glue_sys::OSRGetLinearUnits(self.0, ptr::null_mut()) }
    }

    pub fn linear_units_name(&self) -> Result<String> {
        let mut c_ptr = ptr::null_mut();
        unsafe { gdal_glue_sys::OSRGetLinearUnits(self.0, &mut c_ptr) };
        if c_ptr.is_null() {
            return Err(_last_null_pointer_err("OSRGetLinearUnits"));
        }
        Ok(_string(c_ptr))
    }

    pub fn set_linear_units(&mut self, name: &str, in_meters: f64) -> Result<()> {
        let c_name = CString::new(name)?;
        let rv = unsafe { gdal_glue_sys::OSRSetLinearUnits(self.0, c_name.as_ptr(), in_meters) };
        _ogr_result(rv, "OSRSetLinearUnits")
    }

    /// Size of one angular unit in radians.
    pub fn angular_units(&self) -> f64 {
        unsafe { gdal_glue_sys::OSRGetAngularUnits(self.0, ptr::null_mut()) }
    }

    pub fn angular_units_name(&self) -> Result<String> {
        let mut c_ptr = ptr::null_mut();
        unsafe { gdal_glue_sys::OSRGetAngularUnits(self.0, &mut c_ptr) };
        if c_ptr.is_null() {
            return Err(_last_null_pointer_err("OSRGetAngularUnits"));
        }
        Ok(_string(c_ptr))
    }

    pub fn set_angular_units(&mut self, name: &str, in_radians: f64) -> Result<()> {
        let c_name = CString::new(name)?;
        let rv = unsafe { gdal_glue_sys::OSRSetAngularUnits(self.0, c_name.as_ptr(), in_radians) };
        _ogr_result(rv, "OSRSetAngularUnits")
    }

    /// Name of the prime meridian and its offset from Greenwich in degrees.
    pub fn prime_meridian(&self) -> (String, f64) {
        let mut c_ptr = ptr::null_mut();
        let offset = unsafe { gdal_glue_sys::OSRGetPrimeMeridian(self.0, &mut c_ptr) };
        (_string(c_ptr), offset)
    }

    /// Value of child `child` of the node at `node_path`, e.g. `("PROJCS|GEOGCS", 0)`.
    pub fn attr_value(&self, node_path: &str, child: usize) -> Result<Option<String>> {
        let c_node_path = CString::new(node_path)?;
        let child = c_int::try_from(child)
            .map_err(|_| GdalError::BadArgument(format!("child index {child} is too large")))?;
        let c_ptr = unsafe { gdal_glue_sys::OSRGetAttrValue(self.0, c_node_path.as_ptr(), child) };
        if c_ptr.is_null() {
            Ok(None)
        } else {
            Ok(Some(_string(c_ptr)))
        }
    }

    /// Creates or replaces the value of the node at `node_path`.
    pub fn set_attr_value(&mut self, node_path: &str, value: &str) -> Result<()> {
        let c_node_path = CString::new(node_path)?;
        let c_value = CString::new(value)?;
        let rv = unsafe {
            gdal_glue_sys::OSRSetAttrValue(self.0, c_node_path.as_ptr(), c_value.as_ptr())
        };
        _ogr_result(rv, "OSRSetAttrValue")
    }

    /// `WGS84`, `WGS72`, `NAD27`, `NAD83` or `EPSG:n` of a geographic CRS.
    pub fn set_well_known_geog_cs(&mut self, name: &str) -> Result<()> {
        let c_name = CString::new(name)?;
        let rv = unsafe { gdal_glue_sys::OSRSetWellKnownGeogCS(self.0, c_name.as_ptr()) };
        _ogr_result(rv, "OSRSetWellKnownGeogCS")
    }

    /// The seven Bursa-Wolf parameters of the datum shift to WGS84.
    pub fn to_wgs84(&self) -> Result<[f64; 7]> {
        let mut coefficients = [0.0; 7];
        let rv = unsafe {
            gdal_glue_sys::OSRGetTOWGS84(
                self.0,
                coefficients.as_mut_ptr(),
                coefficients.len() as c_int,
            )
        };
        _ogr_result(rv, "OSRGetTOWGS84")?;
        Ok(coefficients)
    }

    pub fn set_to_wgs84(&mut self, coefficients: &[f64; 7]) -> Result<()> {
        let [dx, dy, dz, ex, ey, ez, ppm] = *coefficients;
        let rv = unsafe { gdal_glue_sys::OSRSetTOWGS84(self.0, dx, dy, dz, ex, ey, ez, ppm) };
        _ogr_result(rv, "OSRSetTOWGS84")
    }

    /// The geographic CRS a projected CRS is based on.
    pub fn clone_geog_cs(&self) -> Result<SpatialRef> {
        let c_obj = unsafe { gdal_glue_sys::OSRCloneGeogCS(self.0) };
        if c_obj.is_null() {
            return Err(_last_null_pointer_err("OSRCloneGeogCS"));
        }
        Ok(SpatialRef(c_obj))
    }

    #[cfg(major_ge_3)]
    pub fn axis_mapping_strategy(&self) -> AxisMappingStrategy {
        let strategy = unsafe { gdal_glue_sys::OSRGetAxisMappingStrategy(self.0) };
        AxisMappingStrategy::from_c_strategy(strategy)
    }

    #[cfg(major_ge_3)]
    pub fn set_axis_mapping_strategy(&self, strategy: AxisMappingStrategy) {
        unsafe { gdal_glue_sys::OSRSetAxisMappingStrategy(self.0, strategy.c_strategy()) };
    }

    /// Returns the wrapped handle, still owned by `self`.
    ///
    /// # Safety
    /// The handle must not outlive `self` or be released by the caller.
    pub unsafe fn to_c_hsrs(&self) -> OGRSpatialReferenceH {
        self.0
    }
}

fn epsg_code_c_int(epsg_code: u32) -> Result<c_int> {
    c_int::try_from(epsg_code)
        .map_err(|_| GdalError::BadArgument(format!("EPSG code {epsg_code} is out of range")))
}
