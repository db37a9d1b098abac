use gdal_glue_sys::GDALMajorObjectH;

/// Any GDAL object deriving from `GDALMajorObject`: drivers, datasets and bands.
pub trait MajorObject {
    /// # Safety
    /// The returned handle is only valid while `self` is alive.
    unsafe fn gdal_object_ptr(&self) -> GDALMajorObjectH;
}
