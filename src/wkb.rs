//! Forwarders over the OGR well-known-binary entry points.
//!
//! GDAL 2.3.0 turned the input buffer of `OGR_G_CreateFromWkb` and
//! `OGR_G_ImportFromWkb` from `unsigned char *` into `const void *`. The
//! functions here have one signature for every GDAL release and compile the
//! body matching the linked version. They return the raw `OGRErr` code and
//! never read or write the buffers themselves.
//!
//! [`Geometry`](crate::vector::Geometry) wraps these in a safe API.

use gdal_glue_sys::{OGRErr, OGRGeometryH, OGRSpatialReferenceH, OGRwkbByteOrder};
use libc::{c_int, c_uchar, c_void};

/// `true` when the linked GDAL declares the WKB readers with `const void *`.
pub const VOID_POINTER_ABI: bool = cfg!(any(major_ge_3, all(major_is_2, minor_ge_3)));

/// `OGR_G_CreateFromWkb`.
///
/// # Safety
/// `data` must be readable for `n_bytes` bytes (or GDAL's own rules for a
/// negative `n_bytes`), `srs` must be NULL or a live spatial reference and
/// `out_geometry` must be writable.
#[cfg(any(major_ge_3, all(major_is_2, minor_ge_3)))]
pub unsafe fn create_from_wkb(
    data: *const c_void,
    srs: OGRSpatialReferenceH,
    out_geometry: *mut OGRGeometryH,
    n_bytes: c_int,
) -> OGRErr::Type {
    gdal_glue_sys::OGR_G_CreateFromWkb(data, srs, out_geometry, n_bytes)
}

/// `OGR_G_CreateFromWkb`.
///
/// # Safety
/// `data` must be readable for `n_bytes` bytes (or GDAL's own rules for a
/// negative `n_bytes`), `srs` must be NULL or a live spatial reference and
/// `out_geometry` must be writable.
#[cfg(not(any(major_ge_3, all(major_is_2, minor_ge_3))))]
pub unsafe fn create_from_wkb(
    data: *const c_void,
    srs: OGRSpatialReferenceH,
    out_geometry: *mut OGRGeometryH,
    n_bytes: c_int,
) -> OGRErr::Type {
    // declared `unsigned char *` before 2.3.0 but never written to
    gdal_glue_sys::OGR_G_CreateFromWkb(data as *mut c_uchar, srs, out_geometry, n_bytes)
}

/// `OGR_G_ImportFromWkb`.
///
/// # Safety
/// `geometry` must be a live geometry and `data` readable for `n_bytes` bytes.
#[cfg(any(major_ge_3, all(major_is_2, minor_ge_3)))]
pub unsafe fn import_from_wkb(
    geometry: OGRGeometryH,
    data: *const c_void,
    n_bytes: c_int,
) -> OGRErr::Type {
    gdal_glue_sys::OGR_G_ImportFromWkb(geometry, data, n_bytes)
}

/// `OGR_G_ImportFromWkb`.
///
/// # Safety
/// `geometry` must be a live geometry and `data` readable for `n_bytes` bytes.
#[cfg(not(any(major_ge_3, all(major_is_2, minor_ge_3))))]
pub unsafe fn import_from_wkb(
    geometry: OGRGeometryH,
    data: *const c_void,
    n_bytes: c_int,
) -> OGRErr::Type {
    gdal_glue_sys::OGR_G_ImportFromWkb(geometry, data as *mut c_uchar, n_bytes)
}

/// `OGR_G_ExportToWkb`.
///
/// # Safety
/// `geometry` must be a live geometry and `dst_buffer` writable for
/// `OGR_G_WkbSize(geometry)` bytes.
#[cfg(any(major_ge_3, all(major_is_2, minor_ge_3)))]
pub unsafe fn export_to_wkb(
    geometry: OGRGeometryH,
    byte_order: OGRwkbByteOrder::Type,
    dst_buffer: *mut c_uchar,
) -> OGRErr::Type {
    gdal_glue_sys::OGR_G_ExportToWkb(geometry, byte_order, dst_buffer)
}

/// `OGR_G_ExportToWkb`.
///
/// # Safety
/// `geometry` must be a live geometry and `dst_buffer` writable for
/// `OGR_G_WkbSize(geometry)` bytes.
#[cfg(not(any(major_ge_3, all(major_is_2, minor_ge_3))))]
pub unsafe fn export_to_wkb(
    geometry: OGRGeometryH,
    byte_order: OGRwkbByteOrder::Type,
    dst_buffer: *mut c_uchar,
) -> OGRErr::Type {
    gdal_glue_sys::OGR_G_ExportToWkb(geometry, byte_order, dst_buffer)
}
