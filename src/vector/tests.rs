use super::*;
use crate::assert_near;
use crate::cpl::CslStringList;
use crate::dataset::Dataset;
use crate::driver::DriverManager;
use crate::errors::GdalError;
use crate::spatial_ref::SpatialRef;
use crate::test_utils::SuppressGDALErrorLog;
use gdal_glue_sys::OGRErr;

const SQUARE: &str = "POLYGON ((0 0,0 2,2 2,2 0,0 0))";

/// `POINT (1 2)` in little endian WKB.
const POINT_NDR: [u8; 21] = [
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x40,
];

fn memory_dataset() -> Dataset {
    DriverManager::get_driver_by_name("Memory")
        .unwrap()
        .create_vector_only("")
        .unwrap()
}

#[test]
fn test_envelope_3d() {
    let mut env0 = Envelope3D::default();
    assert!(!env0.is_init());
    env0.min_x = -4.0;
    assert!(env0.is_init());
    env0.max_x = 4.0;
    env0.min_y = -5.0;
    env0.max_y = 5.0;
    env0.min_z = -6.0;
    env0.max_z = 6.0;

    let line = Geometry::from_wkt("LINESTRING (-1 -2 -3,1 2 3)").unwrap();
    let env1 = line.envelope_3d();
    assert_eq!(env1, Envelope3D::new(-1.0, 1.0, -2.0, 2.0, -3.0, 3.0));

    assert!(env0.contains(&env1));
    assert!(!env1.contains(&env0));

    let mut union = env0;
    union.merge(&env1);
    assert_eq!(union, env0);

    let mut intersection = env1;
    intersection.intersect(&env0);
    assert_eq!(intersection, env1);
}

#[test]
fn test_envelope_2d() {
    let geom = Geometry::from_wkt(SQUARE).unwrap();
    let env = geom.envelope();
    assert_eq!(env, Envelope::new(0.0, 2.0, 0.0, 2.0));
    assert!(env.intersects(&Geometry::from_wkt("POINT (1 1)").unwrap().envelope()));
}

#[test]
fn test_wkt_round_trip() {
    let geom = Geometry::from_wkt(SQUARE).unwrap();
    assert_eq!(geom.wkt().unwrap(), SQUARE);
    assert_eq!(geom.geometry_type(), OGRwkbGeometryType::wkbPolygon);
    assert_eq!(geom.geometry_name(), "POLYGON");
    assert_eq!(geom.area(), 4.0);
    assert!(!geom.is_empty());
}

#[test]
fn test_invalid_wkt() {
    let _nolog = SuppressGDALErrorLog::new();
    let err = Geometry::from_wkt("POLYGON ((0 0, 1").unwrap_err();
    assert!(matches!(
        err,
        GdalError::OgrError {
            method_name: "OGR_G_CreateFromWkt",
            ..
        }
    ));
    assert!(matches!(
        Geometry::from_wkt("POINT (1 2)\0"),
        Err(GdalError::FfiNulError(_))
    ));
}

#[test]
fn test_build_linestring() {
    let mut line = Geometry::empty(OGRwkbGeometryType::wkbLineString).unwrap();
    assert!(line.is_empty());
    line.add_point_2d((0.0, 0.0));
    line.add_point((1.0, 2.0, 3.0));
    assert_eq!(line.point_count(), 2);
    assert_eq!(line.get_point(0), (0.0, 0.0, 0.0));
    assert_eq!(line.get_point(1), (1.0, 2.0, 3.0));
    assert_eq!(line.area(), 0.0);
}

#[test]
fn test_polygon_rings() {
    let mut ring = Geometry::empty(OGRwkbGeometryType::wkbLinearRing).unwrap();
    for pt in [(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0), (0.0, 0.0)] {
        ring.add_point_2d(pt);
    }
    let mut polygon = Geometry::empty(OGRwkbGeometryType::wkbPolygon).unwrap();
    polygon.add_geometry(&ring).unwrap();
    assert_eq!(polygon.geometry_count(), 1);
    assert_eq!(polygon, Geometry::from_wkt(SQUARE).unwrap());

    let exterior = polygon.get_geometry(0).unwrap();
    assert_eq!(exterior.point_count(), 5);
    assert_eq!(exterior.get_point(2), (2.0, 2.0, 0.0));
    assert!(matches!(
        polygon.get_geometry(1),
        Err(GdalError::BadArgument(_))
    ));
}

#[test]
fn test_json() {
    let geom = Geometry::from_wkt("POINT (1 2)").unwrap();
    let json = geom.json().unwrap();
    assert!(json.contains("\"Point\""));
    assert!(json.contains("[ 1.0, 2.0 ]"));
}

#[test]
fn test_wkb_byte_orders() {
    let geom = Geometry::from_wkt("POINT (1 2)").unwrap();
    assert_eq!(geom.wkb_size(), 21);

    let ndr = geom.wkb(WkbByteOrder::Ndr).unwrap();
    assert_eq!(ndr, POINT_NDR);

    let xdr = geom.wkb(WkbByteOrder::Xdr).unwrap();
    assert_eq!(xdr[0], 0x00);
    assert_eq!(&xdr[1..5], &[0x00, 0x00, 0x00, 0x01]);
    assert_eq!(&xdr[5..13], &1.0f64.to_be_bytes());
}

#[test]
fn test_from_wkb() {
    let geom = Geometry::from_wkb(&POINT_NDR).unwrap();
    assert_eq!(geom.wkt().unwrap(), "POINT (1 2)");

    let polygon = Geometry::from_wkt(SQUARE).unwrap();
    let xdr = polygon.wkb(WkbByteOrder::Xdr).unwrap();
    assert_eq!(Geometry::from_wkb(&xdr).unwrap(), polygon);
}

#[test]
fn test_from_wkb_errors_pass_through() {
    let _nolog = SuppressGDALErrorLog::new();
    assert!(matches!(
        Geometry::from_wkb(&POINT_NDR[..10]),
        Err(GdalError::OgrError {
            err: OGRErr::OGRERR_NOT_ENOUGH_DATA,
            ..
        })
    ));
    assert!(matches!(
        Geometry::from_wkb(&[]),
        Err(GdalError::OgrError { .. })
    ));
}

#[test]
fn test_set_from_wkb() {
    let mut geom = Geometry::empty(OGRwkbGeometryType::wkbPoint).unwrap();
    assert!(geom.is_empty());
    geom.set_from_wkb(&POINT_NDR).unwrap();
    assert_eq!(geom.get_point(0), (1.0, 2.0, 0.0));
    assert_eq!(geom.wkb(WkbByteOrder::Ndr).unwrap(), POINT_NDR);
}

#[test]
fn test_set_from_wkb_type_mismatch() {
    let _nolog = SuppressGDALErrorLog::new();
    let mut geom = Geometry::empty(OGRwkbGeometryType::wkbLineString).unwrap();
    assert!(matches!(
        geom.set_from_wkb(&POINT_NDR),
        Err(GdalError::OgrError {
            method_name: "OGR_G_ImportFromWkb",
            ..
        })
    ));
}

#[test]
fn test_clone_is_independent() {
    let mut line = Geometry::from_wkt("LINESTRING (0 0,1 1)").unwrap();
    let copy = line.clone();
    line.add_point_2d((2.0, 2.0));
    assert_eq!(line.point_count(), 3);
    assert_eq!(copy.point_count(), 2);
    assert_ne!(line, copy);
}

#[test]
fn test_geometry_spatial_ref() {
    let mut geom = Geometry::from_wkt("POINT (1 2)").unwrap();
    assert!(geom.spatial_ref().is_none());
    let srs = SpatialRef::from_epsg(4326).unwrap();
    geom.set_spatial_ref(&srs);
    drop(srs);
    assert_eq!(geom.spatial_ref().unwrap().auth_code().unwrap(), 4326);
}

#[test]
fn test_debug_is_wkt() {
    let geom = Geometry::from_wkt("POINT (1 2)").unwrap();
    assert_eq!(format!("{geom:?}"), "POINT (1 2)");
}

#[test]
fn test_layer_fields() {
    let mut dataset = memory_dataset();
    let layer = dataset
        .create_layer("cities", None, OGRwkbGeometryType::wkbPoint, &CslStringList::new())
        .unwrap();
    assert_eq!(layer.name(), "cities");
    assert_eq!(layer.feature_count(), 0);
    assert!(layer.spatial_ref().is_none());

    layer
        .create_defn_fields(&[
            ("name", OGRFieldType::OFTString),
            ("population", OGRFieldType::OFTInteger64),
            ("area", OGRFieldType::OFTReal),
        ])
        .unwrap();
    assert_eq!(layer.field_count(), 3);
    assert_eq!(layer.field_index("area").unwrap(), 2);
    assert_eq!(
        layer.defn_fields(),
        vec![
            ("name".to_string(), OGRFieldType::OFTString),
            ("population".to_string(), OGRFieldType::OFTInteger64),
            ("area".to_string(), OGRFieldType::OFTReal),
        ]
    );
    assert!(matches!(
        layer.field_index("nope"),
        Err(GdalError::InvalidFieldName { .. })
    ));
}

#[test]
fn test_layer_spatial_ref() {
    let mut dataset = memory_dataset();
    let srs = SpatialRef::from_epsg(4326).unwrap();
    let layer = dataset
        .create_layer("cities", Some(&srs), OGRwkbGeometryType::wkbPoint, &CslStringList::new())
        .unwrap();
    assert_eq!(layer.spatial_ref().unwrap().auth_code().unwrap(), 4326);
}

#[test]
fn test_write_and_read_features() {
    let mut dataset = memory_dataset();
    let mut layer = dataset
        .create_layer("cities", None, OGRwkbGeometryType::wkbPoint, &CslStringList::new())
        .unwrap();
    layer
        .create_defn_fields(&[
            ("name", OGRFieldType::OFTString),
            ("population", OGRFieldType::OFTInteger64),
            ("area", OGRFieldType::OFTReal),
        ])
        .unwrap();

    layer
        .create_feature_fields(
            Geometry::from_wkt("POINT (2.35 48.85)").unwrap(),
            &["name", "population", "area"],
            &[
                FieldValue::StringValue("Paris".to_string()),
                FieldValue::Integer64Value(2_102_650),
                FieldValue::RealValue(105.4),
            ],
        )
        .unwrap();
    layer
        .create_feature(Geometry::from_wkt("POINT (0 0)").unwrap())
        .unwrap();
    assert_eq!(layer.feature_count(), 2);

    let features: Vec<_> = layer.features().collect();
    assert_eq!(features.len(), 2);

    let paris = &features[0];
    assert!(paris.fid().is_some());
    assert_eq!(
        paris.field("name").unwrap(),
        Some(FieldValue::StringValue("Paris".to_string()))
    );
    assert_eq!(
        paris.field("population").unwrap(),
        Some(FieldValue::Integer64Value(2_102_650))
    );
    assert_eq!(paris.field_as_integer64(1).unwrap(), Some(2_102_650));
    assert_near!(paris.field_as_double(2).unwrap().unwrap(), 105.4);
    assert_eq!(paris.field_as_string(2).unwrap(), Some("105.4".to_string()));
    assert_eq!(paris.field_as_integer(2).unwrap(), Some(105));
    let point = paris.geometry().unwrap();
    assert_eq!(point.get_point(0), (2.35, 48.85, 0.0));

    let null_island = &features[1];
    assert_eq!(null_island.field("name").unwrap(), None);
    assert_eq!(null_island.field_as_double(2).unwrap(), None);
    assert_eq!(null_island.geometry().unwrap().wkt().unwrap(), "POINT (0 0)");
}

#[test]
fn test_feature_field_errors() {
    let mut dataset = memory_dataset();
    let mut layer = dataset
        .create_layer("dates", None, OGRwkbGeometryType::wkbNone, &CslStringList::new())
        .unwrap();
    layer
        .create_defn_fields(&[("when", OGRFieldType::OFTDate)])
        .unwrap();

    let mut feature = Feature::new(&layer).unwrap();
    assert_eq!(feature.fid(), None);
    assert!(feature.geometry().is_none());
    feature
        .set_field("when", &FieldValue::StringValue("2020-01-02".to_string()))
        .unwrap();

    assert!(matches!(
        feature.field("when"),
        Err(GdalError::UnhandledFieldType {
            field_type: OGRFieldType::OFTDate,
            ..
        })
    ));
    assert!(matches!(
        feature.field("missing"),
        Err(GdalError::InvalidFieldName { .. })
    ));
    assert!(matches!(
        feature.field_as_double(1),
        Err(GdalError::InvalidFieldIndex { index: 1, .. })
    ));
    assert_eq!(feature.field_as_string(0).unwrap(), Some("2020/01/02".to_string()));

    feature.create(&layer).unwrap();
    assert!(feature.fid().is_some());
    drop(feature);
    assert_eq!(layer.features().count(), 1);
}

#[test]
fn test_create_feature_fields_length_mismatch() {
    let mut dataset = memory_dataset();
    let mut layer = dataset
        .create_layer("points", None, OGRwkbGeometryType::wkbPoint, &CslStringList::new())
        .unwrap();
    let err = layer
        .create_feature_fields(
            Geometry::from_wkt("POINT (0 0)").unwrap(),
            &["a", "b"],
            &[FieldValue::IntegerValue(1)],
        )
        .unwrap_err();
    assert!(matches!(err, GdalError::BadArgument(_)));
    assert_eq!(layer.feature_count(), 0);
}

#[test]
fn test_field_value_conversions() {
    assert_eq!(FieldValue::IntegerValue(3).into_int64(), Some(3));
    assert_eq!(FieldValue::RealValue(1.5).into_int64(), None);
    assert_eq!(FieldValue::Integer64Value(7).into_real(), Some(7.0));
    assert_eq!(FieldValue::StringValue("x".into()).into_real(), None);
    assert_eq!(FieldValue::RealValue(1.5).into_string(), "1.5");
    assert_eq!(
        FieldValue::StringValue("x".into()).ogr_field_type(),
        OGRFieldType::OFTString
    );
}
