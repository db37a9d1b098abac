use std::ffi::CString;
use std::fmt::{Display, Formatter};

use crate::errors::{GdalError, Result};
use crate::utils::_string;
pub use gdal_glue_sys::GDALDataType;
use gdal_glue_sys::{
    GDALColorInterp, GDALDataTypeIsComplex, GDALDataTypeUnion, GDALGetDataTypeByName,
    GDALGetDataTypeName, GDALGetDataTypeSizeBytes,
};

/// Primitive pixel types that can be read from and written to a band.
pub trait GdalType {
    fn gdal_type() -> GDALDataType::Type;

    fn datatype() -> GdalDataType {
        GdalDataType(Self::gdal_type())
    }
}

macro_rules! gdal_type {
    ($($(#[$attr:meta])* $ty:ty => $gdt:ident),+ $(,)?) => {
        $(
            $(#[$attr])*
            impl GdalType for $ty {
                fn gdal_type() -> GDALDataType::Type {
                    GDALDataType::$gdt
                }
            }
        )+
    };
}

gdal_type! {
    u8 => GDT_Byte,
    #[cfg(any(major_ge_4, all(major_is_3, minor_ge_7)))]
    i8 => GDT_Int8,
    u16 => GDT_UInt16,
    i16 => GDT_Int16,
    u32 => GDT_UInt32,
    i32 => GDT_Int32,
    #[cfg(any(major_ge_4, all(major_is_3, minor_ge_5)))]
    u64 => GDT_UInt64,
    #[cfg(any(major_ge_4, all(major_is_3, minor_ge_5)))]
    i64 => GDT_Int64,
    f32 => GDT_Float32,
    f64 => GDT_Float64,
}

/// A `GDALDataType` with the lookups GDAL offers for it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GdalDataType(GDALDataType::Type);

impl GdalDataType {
    pub fn gdal_type(&self) -> GDALDataType::Type {
        self.0
    }

    /// `"Byte"`, `"Float32"` and so on; `"Unknown"` for `GDT_Unknown`.
    pub fn name(&self) -> String {
        _string(unsafe { GDALGetDataTypeName(self.0) })
    }

    /// Looks a type up by its GDAL name, `None` when GDAL does not know it.
    pub fn from_name(name: &str) -> Result<Option<GdalDataType>> {
        let c_name = CString::new(name)?;
        let gdal_type = unsafe { GDALGetDataTypeByName(c_name.as_ptr()) };
        if gdal_type == GDALDataType::GDT_Unknown {
            return Ok(None);
        }
        Ok(Some(GdalDataType(gdal_type)))
    }

    /// Size of one pixel value, 0 for `GDT_Unknown`.
    pub fn size_bytes(&self) -> usize {
        (unsafe { GDALGetDataTypeSizeBytes(self.0) }) as usize
    }

    pub fn is_complex(&self) -> bool {
        (unsafe { GDALDataTypeIsComplex(self.0) }) != 0
    }

    /// The smallest type able to hold values of both `self` and `other`.
    pub fn union(&self, other: GdalDataType) -> GdalDataType {
        GdalDataType(unsafe { GDALDataTypeUnion(self.0, other.0) })
    }
}

impl From<GDALDataType::Type> for GdalDataType {
    fn from(value: GDALDataType::Type) -> Self {
        GdalDataType(value)
    }
}

impl Display for GdalDataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// How the values of a band are meant to be interpreted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ColorInterpretation {
    Undefined,
    GrayIndex,
    PaletteIndex,
    RedBand,
    GreenBand,
    BlueBand,
    AlphaBand,
    HueBand,
    SaturationBand,
    LightnessBand,
    CyanBand,
    MagentaBand,
    YellowBand,
    BlackBand,
    YCbCrSpaceY,
    YCbCrSpaceCb,
    YCbCrSpaceCr,
}

impl ColorInterpretation {
    /// Fails for values newer than this crate knows about.
    pub fn from_c_int(color_interpretation: GDALColorInterp::Type) -> Result<Self> {
        use GDALColorInterp::*;
        Ok(match color_interpretation {
            GCI_Undefined => Self::Undefined,
            GCI_GrayIndex => Self::GrayIndex,
            GCI_PaletteIndex => Self::PaletteIndex,
            GCI_RedBand => Self::RedBand,
            GCI_GreenBand => Self::GreenBand,
            GCI_BlueBand => Self::BlueBand,
            GCI_AlphaBand => Self::AlphaBand,
            GCI_HueBand => Self::HueBand,
            GCI_SaturationBand => Self::SaturationBand,
            GCI_LightnessBand => Self::LightnessBand,
            GCI_CyanBand => Self::CyanBand,
            GCI_MagentaBand => Self::MagentaBand,
            GCI_YellowBand => Self::YellowBand,
            GCI_BlackBand => Self::BlackBand,
            GCI_YCbCr_YBand => Self::YCbCrSpaceY,
            GCI_YCbCr_CbBand => Self::YCbCrSpaceCb,
            GCI_YCbCr_CrBand => Self::YCbCrSpaceCr,
            other => {
                return Err(GdalError::BadArgument(format!(
                    "unknown GDALColorInterp {other}"
                )))
            }
        })
    }

    pub fn c_int(&self) -> GDALColorInterp::Type {
        use GDALColorInterp::*;
        match self {
            Self::Undefined => GCI_Undefined,
            Self::GrayIndex => GCI_GrayIndex,
            Self::PaletteIndex => GCI_PaletteIndex,
            Self::RedBand => GCI_RedBand,
            Self::GreenBand => GCI_GreenBand,
            Self::BlueBand => GCI_BlueBand,
            Self::AlphaBand => GCI_AlphaBand,
            Self::HueBand => GCI_HueBand,
            Self::SaturationBand => GCI_SaturationBand,
            Self::LightnessBand => GCI_LightnessBand,
            Self::CyanBand => GCI_CyanBand,
            Self::MagentaBand => GCI_MagentaBand,
            Self::YellowBand => GCI_YellowBand,
            Self::BlackBand => GCI_BlackBand,
            Self::YCbCrSpaceY => GCI_YCbCr_YBand,
            Self::YCbCrSpaceCb => GCI_YCbCr_CbBand,
            Self::YCbCrSpaceCr => GCI_YCbCr_CrBand,
        }
    }

    /// GDAL's name, e.g. `"Red"`.
    pub fn name(&self) -> String {
        _string(unsafe { gdal_glue_sys::GDALGetColorInterpretationName(self.c_int()) })
    }

    /// Inverse of [`ColorInterpretation::name`], case insensitive. Unknown
    /// names map to `Undefined`.
    pub fn from_name(name: &str) -> Result<Self> {
        let c_name = CString::new(name)?;
        let c_int = unsafe { gdal_glue_sys::GDALGetColorInterpretationByName(c_name.as_ptr()) };
        Self::from_c_int(c_int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_names() {
        assert_eq!(u8::datatype().name(), "Byte");
        assert_eq!(i16::datatype().name(), "Int16");
        assert_eq!(f64::datatype().to_string(), "Float64");
        assert_eq!(
            GdalDataType::from_name("UInt32").unwrap(),
            Some(u32::datatype())
        );
        assert_eq!(GdalDataType::from_name("NotAType").unwrap(), None);
    }

    #[test]
    fn test_data_type_sizes() {
        assert_eq!(u8::datatype().size_bytes(), 1);
        assert_eq!(u16::datatype().size_bytes(), 2);
        assert_eq!(f32::datatype().size_bytes(), 4);
        assert_eq!(f64::datatype().size_bytes(), 8);
        assert_eq!(GdalDataType::from(GDALDataType::GDT_Unknown).size_bytes(), 0);
    }

    #[test]
    fn test_data_type_complex_and_union() {
        assert!(!f32::datatype().is_complex());
        assert!(GdalDataType::from(GDALDataType::GDT_CFloat32).is_complex());
        assert_eq!(u8::datatype().union(i16::datatype()), i16::datatype());
        assert_eq!(u16::datatype().union(i16::datatype()), i32::datatype());
        assert_eq!(f32::datatype().union(u8::datatype()), f32::datatype());
    }

    #[cfg(any(major_ge_4, all(major_is_3, minor_ge_5)))]
    #[test]
    fn test_64bit_types() {
        assert_eq!(u64::datatype().name(), "UInt64");
        assert_eq!(i64::datatype().size_bytes(), 8);
    }

    #[test]
    fn test_color_interpretation_names() {
        assert_eq!(ColorInterpretation::RedBand.name(), "Red");
        assert_eq!(
            ColorInterpretation::from_name("alpha").unwrap(),
            ColorInterpretation::AlphaBand
        );
        assert_eq!(
            ColorInterpretation::from_name("no such band").unwrap(),
            ColorInterpretation::Undefined
        );
        for c in [
            ColorInterpretation::GrayIndex,
            ColorInterpretation::PaletteIndex,
            ColorInterpretation::YCbCrSpaceCr,
        ] {
            assert_eq!(ColorInterpretation::from_c_int(c.c_int()).unwrap(), c);
        }
        assert!(ColorInterpretation::from_c_int(1000).is_err());
    }
}
