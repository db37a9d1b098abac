pub mod OGRErr {
    pub type Type = libc::c_int;
    pub const OGRERR_NONE: Type = 0;
    pub const OGRERR_NOT_ENOUGH_DATA: Type = 1;
    pub const OGRERR_NOT_ENOUGH_MEMORY: Type = 2;
    pub const OGRERR_UNSUPPORTED_GEOMETRY_TYPE: Type = 3;
    pub const OGRERR_UNSUPPORTED_OPERATION: Type = 4;
    pub const OGRERR_CORRUPT_DATA: Type = 5;
    pub const OGRERR_FAILURE: Type = 6;
    pub const OGRERR_UNSUPPORTED_SRS: Type = 7;
    pub const OGRERR_INVALID_HANDLE: Type = 8;
    pub const OGRERR_NON_EXISTING_FEATURE: Type = 9;
}

pub mod OGRwkbByteOrder {
    pub type Type = libc::c_uint;
    /// Big endian.
    pub const wkbXDR: Type = 0;
    /// Little endian.
    pub const wkbNDR: Type = 1;
}

pub mod OGRwkbGeometryType {
    pub type Type = libc::c_uint;
    pub const wkbUnknown: Type = 0;
    pub const wkbPoint: Type = 1;
    pub const wkbLineString: Type = 2;
    pub const wkbPolygon: Type = 3;
    pub const wkbMultiPoint: Type = 4;
    pub const wkbMultiLineString: Type = 5;
    pub const wkbMultiPolygon: Type = 6;
    pub const wkbGeometryCollection: Type = 7;
    pub const wkbNone: Type = 100;
    pub const wkbLinearRing: Type = 101;
    pub const wkbPoint25D: Type = 0x8000_0001;
    pub const wkbLineString25D: Type = 0x8000_0002;
    pub const wkbPolygon25D: Type = 0x8000_0003;
    pub const wkbMultiPoint25D: Type = 0x8000_0004;
    pub const wkbMultiLineString25D: Type = 0x8000_0005;
    pub const wkbMultiPolygon25D: Type = 0x8000_0006;
    pub const wkbGeometryCollection25D: Type = 0x8000_0007;
}

pub mod OGRFieldType {
    pub type Type = libc::c_uint;
    pub const OFTInteger: Type = 0;
    pub const OFTIntegerList: Type = 1;
    pub const OFTReal: Type = 2;
    pub const OFTRealList: Type = 3;
    pub const OFTString: Type = 4;
    pub const OFTStringList: Type = 5;
    pub const OFTWideString: Type = 6;
    pub const OFTWideStringList: Type = 7;
    pub const OFTBinary: Type = 8;
    pub const OFTDate: Type = 9;
    pub const OFTTime: Type = 10;
    pub const OFTDateTime: Type = 11;
    pub const OFTInteger64: Type = 12;
    pub const OFTInteger64List: Type = 13;
}

pub mod OSRAxisMappingStrategy {
    pub type Type = libc::c_uint;
    pub const OAMS_TRADITIONAL_GIS_ORDER: Type = 0;
    pub const OAMS_AUTHORITY_COMPLIANT: Type = 1;
    pub const OAMS_CUSTOM: Type = 2;
}
