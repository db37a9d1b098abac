use bitflags::bitflags;
use gdal_glue_sys::GDALAccess;
use libc::c_uint;

/// Arguments of [`crate::Dataset::open_ex`].
#[derive(Debug, Default)]
pub struct DatasetOptions<'a> {
    pub open_flags: GdalOpenFlags,
    pub allowed_drivers: Option<&'a [&'a str]>,
    pub open_options: Option<&'a [&'a str]>,
    pub sibling_files: Option<&'a [&'a str]>,
}

bitflags! {
    /// `nOpenFlags` of `GDALOpenEx`.
    ///
    /// `GDAL_OF_SHARED` is left out: a shared dataset can be handed to another
    /// thread behind our back, which breaks the `Send` guarantee of `Dataset`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GdalOpenFlags: c_uint {
        const GDAL_OF_READONLY = gdal_glue_sys::GDAL_OF_READONLY;
        const GDAL_OF_UPDATE = gdal_glue_sys::GDAL_OF_UPDATE;
        const GDAL_OF_ALL = gdal_glue_sys::GDAL_OF_ALL;
        const GDAL_OF_RASTER = gdal_glue_sys::GDAL_OF_RASTER;
        const GDAL_OF_VECTOR = gdal_glue_sys::GDAL_OF_VECTOR;
        const GDAL_OF_GNM = gdal_glue_sys::GDAL_OF_GNM;
        /// Emit an error message when opening fails.
        const GDAL_OF_VERBOSE_ERROR = gdal_glue_sys::GDAL_OF_VERBOSE_ERROR;
        /// Keep the dataset out of the global list of open datasets.
        const GDAL_OF_INTERNAL = gdal_glue_sys::GDAL_OF_INTERNAL;
    }
}

impl Default for GdalOpenFlags {
    fn default() -> GdalOpenFlags {
        GdalOpenFlags::GDAL_OF_READONLY
    }
}

impl From<GDALAccess::Type> for GdalOpenFlags {
    fn from(val: GDALAccess::Type) -> GdalOpenFlags {
        if val == GDALAccess::GA_Update {
            GdalOpenFlags::GDAL_OF_UPDATE
        } else {
            GdalOpenFlags::GDAL_OF_READONLY
        }
    }
}
