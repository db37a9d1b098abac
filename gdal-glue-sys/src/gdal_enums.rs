pub mod GDALDataType {
    pub type Type = libc::c_uint;
    pub const GDT_Unknown: Type = 0;
    pub const GDT_Byte: Type = 1;
    pub const GDT_UInt16: Type = 2;
    pub const GDT_Int16: Type = 3;
    pub const GDT_UInt32: Type = 4;
    pub const GDT_Int32: Type = 5;
    pub const GDT_Float32: Type = 6;
    pub const GDT_Float64: Type = 7;
    pub const GDT_CInt16: Type = 8;
    pub const GDT_CInt32: Type = 9;
    pub const GDT_CFloat32: Type = 10;
    pub const GDT_CFloat64: Type = 11;
    #[cfg(any(major_ge_4, all(major_is_3, minor_ge_5)))]
    pub const GDT_UInt64: Type = 12;
    #[cfg(any(major_ge_4, all(major_is_3, minor_ge_5)))]
    pub const GDT_Int64: Type = 13;
    #[cfg(any(major_ge_4, all(major_is_3, minor_ge_7)))]
    pub const GDT_Int8: Type = 14;
}

pub mod GDALAccess {
    pub type Type = libc::c_uint;
    pub const GA_ReadOnly: Type = 0;
    pub const GA_Update: Type = 1;
}

pub mod GDALRWFlag {
    pub type Type = libc::c_uint;
    pub const GF_Read: Type = 0;
    pub const GF_Write: Type = 1;
}

pub mod GDALColorInterp {
    pub type Type = libc::c_uint;
    pub const GCI_Undefined: Type = 0;
    pub const GCI_GrayIndex: Type = 1;
    pub const GCI_PaletteIndex: Type = 2;
    pub const GCI_RedBand: Type = 3;
    pub const GCI_GreenBand: Type = 4;
    pub const GCI_BlueBand: Type = 5;
    pub const GCI_AlphaBand: Type = 6;
    pub const GCI_HueBand: Type = 7;
    pub const GCI_SaturationBand: Type = 8;
    pub const GCI_LightnessBand: Type = 9;
    pub const GCI_CyanBand: Type = 10;
    pub const GCI_MagentaBand: Type = 11;
    pub const GCI_YellowBand: Type = 12;
    pub const GCI_BlackBand: Type = 13;
    pub const GCI_YCbCr_YBand: Type = 14;
    pub const GCI_YCbCr_CbBand: Type = 15;
    pub const GCI_YCbCr_CrBand: Type = 16;
}

pub mod GDALGridAlgorithm {
    pub type Type = libc::c_uint;
    pub const GGA_InverseDistanceToAPower: Type = 1;
    pub const GGA_MovingAverage: Type = 2;
    pub const GGA_NearestNeighbor: Type = 3;
    pub const GGA_MetricMinimum: Type = 4;
    pub const GGA_MetricMaximum: Type = 5;
    pub const GGA_MetricRange: Type = 6;
    pub const GGA_MetricCount: Type = 7;
    pub const GGA_MetricAverageDistance: Type = 8;
    pub const GGA_MetricAverageDistancePts: Type = 9;
    pub const GGA_Linear: Type = 10;
    pub const GGA_InverseDistanceToAPowerNearestNeighbor: Type = 11;
}

pub const GMF_ALL_VALID: libc::c_int = 0x01;
pub const GMF_PER_DATASET: libc::c_int = 0x02;
pub const GMF_ALPHA: libc::c_int = 0x04;
pub const GMF_NODATA: libc::c_int = 0x08;

pub const GDAL_OF_READONLY: libc::c_uint = 0x00;
pub const GDAL_OF_UPDATE: libc::c_uint = 0x01;
pub const GDAL_OF_ALL: libc::c_uint = 0x00;
pub const GDAL_OF_RASTER: libc::c_uint = 0x02;
pub const GDAL_OF_VECTOR: libc::c_uint = 0x04;
pub const GDAL_OF_GNM: libc::c_uint = 0x08;
pub const GDAL_OF_SHARED: libc::c_uint = 0x20;
pub const GDAL_OF_VERBOSE_ERROR: libc::c_uint = 0x40;
pub const GDAL_OF_INTERNAL: libc::c_uint = 0x80;
