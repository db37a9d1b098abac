use super::{CoordTransform, SpatialRef};
#[cfg(major_ge_3)]
use super::AxisMappingStrategy;
use crate::assert_near;
use crate::errors::GdalError;
use crate::test_utils::SuppressGDALErrorLog;
use crate::vector::Geometry;

const WGS84_LAT_LONG_WKT: &str = "GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563,AUTHORITY[\"EPSG\",7030]],TOWGS84[0,0,0,0,0,0,0],AUTHORITY[\"EPSG\",6326]],PRIMEM[\"Greenwich\",0,AUTHORITY[\"EPSG\",8901]],UNIT[\"DMSH\",0.0174532925199433,AUTHORITY[\"EPSG\",9108]],AXIS[\"Lat\",NORTH],AXIS[\"Long\",EAST],AUTHORITY[\"EPSG\",4326]]";
const ESRI_WGS84_WKT: &str = "GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",SPHEROID[\"WGS_1984\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"Degree\",0.017453292519943295]]";
const LAEA_PROJ4: &str =
    "+proj=laea +lat_0=52 +lon_0=10 +x_0=4321000 +y_0=3210000 +ellps=GRS80 +units=m +no_defs";

#[cfg(major_ge_3)]
fn traditional_order(srs: &SpatialRef) {
    srs.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
}

#[cfg(not(major_ge_3))]
fn traditional_order(_srs: &SpatialRef) {}

#[test]
fn from_wkt_to_proj4() {
    let spatial_ref = SpatialRef::from_wkt(WGS84_LAT_LONG_WKT).unwrap();
    assert_eq!(
        "+proj=longlat +ellps=WGS84 +towgs84=0,0,0,0,0,0,0 +no_defs",
        spatial_ref.to_proj4().unwrap().trim()
    );
    let spatial_ref = SpatialRef::from_definition(WGS84_LAT_LONG_WKT).unwrap();
    assert_eq!(
        "+proj=longlat +ellps=WGS84 +towgs84=0,0,0,0,0,0,0 +no_defs",
        spatial_ref.to_proj4().unwrap().trim()
    );
}

#[test]
fn from_epsg_to_wkt_proj4() {
    let spatial_ref = SpatialRef::from_epsg(4326).unwrap();
    let wkt = spatial_ref.to_wkt().unwrap();
    assert!(wkt.starts_with("GEOGCS[\"WGS 84\""));
    assert!(wkt.ends_with("AUTHORITY[\"EPSG\",\"4326\"]]"));
    let proj4string = spatial_ref.to_proj4().unwrap();
    assert_eq!("+proj=longlat +datum=WGS84 +no_defs", proj4string.trim());

    let pretty = spatial_ref.to_pretty_wkt(false).unwrap();
    assert!(pretty.contains('\n'));
    let simplified = spatial_ref.to_pretty_wkt(true).unwrap();
    assert!(!simplified.contains("AUTHORITY"));
}

#[test]
fn from_esri_to_proj4() {
    let spatial_ref = SpatialRef::from_esri(ESRI_WGS84_WKT).unwrap();
    let proj4string = spatial_ref.to_proj4().unwrap();
    assert_eq!("+proj=longlat +datum=WGS84 +no_defs", proj4string.trim());
}

#[test]
fn morph_to_and_from_esri() {
    let mut spatial_ref = SpatialRef::from_epsg(4326).unwrap();
    spatial_ref.morph_to_esri().unwrap();
    assert!(spatial_ref.to_wkt().unwrap().contains("GCS_WGS_1984"));
    spatial_ref.morph_from_esri().unwrap();
    assert!(spatial_ref.is_same_geog_cs(&SpatialRef::from_epsg(4326).unwrap()));
}

#[test]
fn xml_round_trip() {
    let spatial_ref = SpatialRef::from_epsg(4326).unwrap();
    let xml = spatial_ref.to_xml().unwrap();
    assert!(xml.contains("gml:"));
    let parsed = SpatialRef::from_xml(&xml).unwrap();
    assert!(parsed.is_geographic());
    assert!(parsed.is_same_geog_cs(&spatial_ref));
}

#[test]
fn invalid_definitions() {
    let _nolog = SuppressGDALErrorLog::new();
    assert!(matches!(
        SpatialRef::from_definition("not a crs"),
        Err(GdalError::OgrError {
            method_name: "OSRSetFromUserInput",
            ..
        })
    ));
    assert!(SpatialRef::from_epsg(1).is_err());
    assert!(matches!(
        SpatialRef::from_epsg(u32::MAX),
        Err(GdalError::BadArgument(_))
    ));
    assert!(matches!(
        SpatialRef::from_wkt("GEOGCS[\"a\0b\"]"),
        Err(GdalError::FfiNulError(_))
    ));
}

#[test]
fn comparison() {
    let spatial_ref1 = SpatialRef::from_wkt(WGS84_LAT_LONG_WKT).unwrap();
    let spatial_ref2 = SpatialRef::from_epsg(4326).unwrap();
    let spatial_ref3 = SpatialRef::from_epsg(3025).unwrap();
    let spatial_ref4 = SpatialRef::from_proj4("+proj=longlat +datum=WGS84 +no_defs ").unwrap();
    let spatial_ref5 = SpatialRef::from_esri(ESRI_WGS84_WKT).unwrap();

    assert!(spatial_ref1 == spatial_ref2);
    assert!(spatial_ref2 != spatial_ref3);
    assert!(spatial_ref4 == spatial_ref2);
    assert!(spatial_ref5 == spatial_ref4);
    assert!(spatial_ref5.is_same(&spatial_ref2));
    assert!(spatial_ref3.is_same_geog_cs(&spatial_ref3.clone()));
    assert!(spatial_ref2.is_same_vert_cs(&spatial_ref1));
}

#[test]
fn clone_is_independent() {
    let spatial_ref = SpatialRef::from_epsg(4326).unwrap();
    let mut copy = spatial_ref.clone();
    assert_eq!(copy, spatial_ref);
    copy.set_attr_value("GEOGCS", "renamed").unwrap();
    assert_eq!(copy.attr_value("GEOGCS", 0).unwrap().as_deref(), Some("renamed"));
    assert_eq!(
        spatial_ref.attr_value("GEOGCS", 0).unwrap().as_deref(),
        Some("WGS 84")
    );
}

#[test]
fn attr_values() {
    let spatial_ref = SpatialRef::from_epsg(4326).unwrap();
    assert_eq!(
        spatial_ref.attr_value("GEOGCS|DATUM", 0).unwrap().as_deref(),
        Some("WGS_1984")
    );
    assert_eq!(spatial_ref.attr_value("NOT_A_NODE", 0).unwrap(), None);
}

#[test]
fn transform_coordinates() {
    let spatial_ref1 = SpatialRef::from_wkt(WGS84_LAT_LONG_WKT).unwrap();
    let spatial_ref2 = SpatialRef::from_epsg(3035).unwrap();
    traditional_order(&spatial_ref1);
    traditional_order(&spatial_ref2);

    let transform = CoordTransform::new(&spatial_ref1, &spatial_ref2).unwrap();
    let mut xs = [23.43, 23.50];
    let mut ys = [37.58, 37.70];
    let mut zs = [32.0, 20.0];
    transform
        .transform_coords(&mut xs, &mut ys, &mut zs)
        .unwrap();
    assert_near!(xs[0], 5509543.1508097, epsilon = 1e-6);
    assert_near!(ys[0], 1716062.1916192223, epsilon = 1e-6);
    assert_near!(zs[0], 32.0, epsilon = 1e-6);
}

#[test]
fn transform_mismatched_lengths() {
    let wgs84 = SpatialRef::from_epsg(4326).unwrap();
    let webmercator = SpatialRef::from_epsg(3857).unwrap();
    let transform = CoordTransform::new(&wgs84, &webmercator).unwrap();
    let mut x = [1.0, 2.0];
    let mut y = [1.0];
    assert!(matches!(
        transform.transform_coords(&mut x, &mut y, &mut []),
        Err(GdalError::BadArgument(_))
    ));
    // nothing was transformed
    assert_eq!(x, [1.0, 2.0]);
}

#[test]
fn transform_ogr_geometry() {
    let mut geom = Geometry::from_wkt(
        "POLYGON((23.43 37.58, 23.43 40.0, 25.29 40.0, 25.29 37.58, 23.43 37.58))",
    )
    .unwrap();
    let spatial_ref1 = SpatialRef::from_proj4(LAEA_PROJ4).unwrap();
    let spatial_ref2 = SpatialRef::from_wkt(WGS84_LAT_LONG_WKT).unwrap();
    traditional_order(&spatial_ref1);
    traditional_order(&spatial_ref2);

    let htransform = CoordTransform::new(&spatial_ref2, &spatial_ref1).unwrap();
    geom.transform_inplace(&htransform).unwrap();
    let ring = geom.get_geometry(0).unwrap();
    let (x, y, _) = ring.get_point(0);
    assert_near!(x, 5509543.1508097, epsilon = 1e-6);
    assert_near!(y, 1716062.19161922, epsilon = 1e-6);
}

#[test]
fn authority() {
    let spatial_ref = SpatialRef::from_epsg(4326).unwrap();
    assert_eq!(spatial_ref.auth_name().unwrap(), "EPSG".to_string());
    assert_eq!(spatial_ref.auth_code().unwrap(), 4326);
    assert_eq!(spatial_ref.authority().unwrap(), "EPSG:4326".to_string());
    let spatial_ref = SpatialRef::from_wkt(WGS84_LAT_LONG_WKT).unwrap();
    assert_eq!(spatial_ref.auth_name().unwrap(), "EPSG".to_string());
    assert_eq!(spatial_ref.auth_code().unwrap(), 4326);
    assert_eq!(spatial_ref.authority().unwrap(), "EPSG:4326".to_string());
    let spatial_ref = SpatialRef::from_proj4(LAEA_PROJ4).unwrap();
    assert!(spatial_ref.auth_name().is_err());
    assert!(spatial_ref.auth_code().is_err());
    assert!(spatial_ref.authority().is_err());
    assert_eq!(format!("{:?}", SpatialRef::from_epsg(3857).unwrap()), "SpatialRef(\"EPSG:3857\")");
}

#[test]
fn failing_transformation() {
    let wgs84 = SpatialRef::from_epsg(4326).unwrap();
    let webmercator = SpatialRef::from_epsg(3857).unwrap();
    traditional_order(&wgs84);
    traditional_order(&webmercator);

    let mut x = [1000000.0];
    let mut y = [1000000.0];

    let _nolog = SuppressGDALErrorLog::new();
    let trafo = CoordTransform::new(&wgs84, &webmercator).unwrap();
    let r = trafo.transform_coords(&mut x, &mut y, &mut []);

    match r {
        Err(GdalError::InvalidCoordinateRange { from, to, .. }) => {
            assert_eq!(from, "EPSG:4326");
            assert_eq!(to, "EPSG:3857");
        }
        other => panic!("Wrong result: {other:?}"),
    }
}

#[test]
fn auto_identify() {
    // https://epsg.io/32632 without its `AUTHORITY["EPSG","32632"]`
    let mut spatial_ref = SpatialRef::from_wkt(
        r#"
        PROJCS["WGS 84 / UTM zone 32N",
            GEOGCS["WGS 84",
                DATUM["WGS_1984",
                    SPHEROID["WGS 84",6378137,298.257223563,
                        AUTHORITY["EPSG","7030"]],
                    AUTHORITY["EPSG","6326"]],
                PRIMEM["Greenwich",0,
                    AUTHORITY["EPSG","8901"]],
                UNIT["degree",0.0174532925199433,
                    AUTHORITY["EPSG","9122"]],
                AUTHORITY["EPSG","4326"]],
            PROJECTION["Transverse_Mercator"],
            PARAMETER["latitude_of_origin",0],
            PARAMETER["central_meridian",9],
            PARAMETER["scale_factor",0.9996],
            PARAMETER["false_easting",500000],
            PARAMETER["false_northing",0],
            UNIT["metre",1,
                AUTHORITY["EPSG","9001"]],
            AXIS["Easting",EAST],
            AXIS["Northing",NORTH]]
    "#,
    )
    .unwrap();
    assert!(spatial_ref.auth_code().is_err());
    spatial_ref.auto_identify_epsg().unwrap();
    assert_eq!(spatial_ref.auth_code().unwrap(), 32632);
    spatial_ref.validate().unwrap();
}

#[cfg(major_ge_3)]
#[test]
fn axis_mapping_strategy() {
    let spatial_ref = SpatialRef::from_epsg(4326).unwrap();
    assert_eq!(
        spatial_ref.axis_mapping_strategy(),
        AxisMappingStrategy::AuthorityCompliant
    );
    spatial_ref.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
    assert_eq!(
        spatial_ref.axis_mapping_strategy(),
        AxisMappingStrategy::TraditionalGisOrder
    );
}

#[test]
fn get_units_epsg4326() {
    let spatial_ref = SpatialRef::from_epsg(4326).unwrap();

    let angular_units_name = spatial_ref.angular_units_name().unwrap();
    assert_eq!(angular_units_name.to_lowercase(), "degree");
    let to_radians = spatial_ref.angular_units();
    assert_near!(to_radians, 0.01745329, epsilon = 1e-8);

    let (meridian, offset) = spatial_ref.prime_meridian();
    assert_eq!(meridian, "Greenwich");
    assert_eq!(offset, 0.0);
}

#[test]
fn get_units_epsg2154() {
    let spatial_ref = SpatialRef::from_epsg(2154).unwrap();
    let linear_units_name = spatial_ref.linear_units_name().unwrap();
    assert_eq!(linear_units_name.to_lowercase(), "metre");
    let to_meters = spatial_ref.linear_units();
    assert_near!(to_meters, 1.0);
}

#[test]
fn set_units() {
    let mut spatial_ref = SpatialRef::from_proj4(LAEA_PROJ4).unwrap();
    spatial_ref.set_linear_units("US survey foot", 0.304800609601219).unwrap();
    assert_near!(spatial_ref.linear_units(), 0.304800609601219, epsilon = 1e-12);

    let mut geographic = SpatialRef::new().unwrap();
    geographic.set_well_known_geog_cs("WGS84").unwrap();
    assert!(geographic.is_geographic());
    geographic.set_angular_units("radian", 1.0).unwrap();
    assert_near!(geographic.angular_units(), 1.0);
}

#[test]
fn datum_shift() {
    let mut spatial_ref = SpatialRef::new().unwrap();
    spatial_ref.set_well_known_geog_cs("WGS72").unwrap();
    spatial_ref.set_to_wgs84(&[0.0, 0.0, 4.5, 0.0, 0.0, 0.554, 0.2263]).unwrap();
    assert_eq!(
        spatial_ref.to_wgs84().unwrap(),
        [0.0, 0.0, 4.5, 0.0, 0.0, 0.554, 0.2263]
    );

    let without_shift = SpatialRef::from_proj4("+proj=longlat +ellps=GRS80 +no_defs").unwrap();
    assert!(without_shift.to_wgs84().is_err());
}

#[test]
fn clone_geog_cs() {
    let projected = SpatialRef::from_epsg(2154).unwrap();
    let geographic = projected.clone_geog_cs().unwrap();
    assert!(geographic.is_geographic());
    assert!(!geographic.is_projected());
    assert!(geographic.is_same_geog_cs(&projected));
}

#[test]
fn predicates_epsg4326() {
    let spatial_ref_4326 = SpatialRef::from_epsg(4326).unwrap();
    assert!(spatial_ref_4326.is_geographic());
    assert!(!spatial_ref_4326.is_local());
    assert!(!spatial_ref_4326.is_projected());
    assert!(!spatial_ref_4326.is_compound());
    assert!(!spatial_ref_4326.is_geocentric());
    assert!(!spatial_ref_4326.is_vertical());
}

#[test]
fn predicates_epsg2154() {
    let spatial_ref_2154 = SpatialRef::from_epsg(2154).unwrap();
    assert!(!spatial_ref_2154.is_geographic());
    assert!(!spatial_ref_2154.is_local());
    assert!(spatial_ref_2154.is_projected());
    assert!(!spatial_ref_2154.is_compound());
    assert!(!spatial_ref_2154.is_geocentric());
}

#[test]
fn predicates_other_kinds() {
    assert!(SpatialRef::from_epsg(4978).unwrap().is_geocentric());
    assert!(SpatialRef::from_epsg(5703).unwrap().is_vertical());
    assert!(SpatialRef::from_epsg(7405).unwrap().is_compound());
}
