use std::ptr;

use gdal_glue::spatial_ref::SpatialRef;
use gdal_glue::vector::{Geometry, WkbByteOrder};
use gdal_glue::wkb;
use gdal_glue_sys::{OGRErr, OGRwkbByteOrder};
use libc::c_int;

#[test]
fn test_create_from_wkb_assigns_srs() {
    let polygon = Geometry::from_wkt("POLYGON ((0 0,0 1,1 1,1 0,0 0))").unwrap();
    let bytes = polygon.wkb(WkbByteOrder::Xdr).unwrap();
    let srs = SpatialRef::from_epsg(4326).unwrap();

    let mut c_geom = ptr::null_mut();
    let rv = unsafe {
        wkb::create_from_wkb(
            bytes.as_ptr().cast(),
            srs.to_c_hsrs(),
            &mut c_geom,
            bytes.len() as c_int,
        )
    };
    assert_eq!(rv, OGRErr::OGRERR_NONE);

    let geom = unsafe { Geometry::with_c_geometry(c_geom, true) };
    assert_eq!(geom, polygon);
    assert_eq!(geom.spatial_ref().unwrap(), srs);
}

#[test]
fn test_export_matches_direct_call() {
    let line = Geometry::from_wkt("LINESTRING (1 2 3,4 5 6)").unwrap();
    let size = line.wkb_size();

    let mut via_shim = vec![0u8; size];
    let mut direct = vec![0u8; size];
    unsafe {
        let c_geom = line.c_geometry();
        assert_eq!(
            wkb::export_to_wkb(c_geom, OGRwkbByteOrder::wkbXDR, via_shim.as_mut_ptr()),
            OGRErr::OGRERR_NONE
        );
        assert_eq!(
            gdal_glue_sys::OGR_G_ExportToWkb(c_geom, OGRwkbByteOrder::wkbXDR, direct.as_mut_ptr()),
            OGRErr::OGRERR_NONE
        );
    }
    assert_eq!(via_shim, direct);
    assert_eq!(via_shim, line.wkb(WkbByteOrder::Xdr).unwrap());
}

#[test]
fn test_import_replaces_content() {
    let source = Geometry::from_wkt("LINESTRING (0 0,1 1,2 2)").unwrap();
    let bytes = source.wkb(WkbByteOrder::Ndr).unwrap();

    let mut target = Geometry::from_wkt("LINESTRING (9 9,8 8)").unwrap();
    let rv = unsafe {
        wkb::import_from_wkb(target.c_geometry(), bytes.as_ptr().cast(), bytes.len() as c_int)
    };
    assert_eq!(rv, OGRErr::OGRERR_NONE);
    assert_eq!(target, source);

    target.set_from_wkb(&bytes).unwrap();
    assert_eq!(target.point_count(), 3);
}
