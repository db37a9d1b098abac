//! Version of the linked GDAL library.
//!
//! The `VERSION_*` constants are fixed when the crate is built, from the
//! version reported by `gdal-glue-sys`. [`version_info`] and [`VersionInfo`]
//! query the library that is actually loaded at run time.
//!
//! ```rust, no_run
//! use gdal_glue::version::{VersionInfo, VERSION_MAJOR, VERSION_MINOR};
//! println!("built against {VERSION_MAJOR}.{VERSION_MINOR}, running {}", VersionInfo::Summary);
//! ```

use std::ffi::CString;
use std::fmt::{Debug, Display, Formatter};

use crate::errors::Result;
use crate::utils::_string;

include!(concat!(env!("OUT_DIR"), "/gdal_version.rs"));

/// Calls `GDALVersionInfo`. Recognised keys are `VERSION_NUM`, `RELEASE_DATE`,
/// `RELEASE_NAME`, `--version`, `LICENSE` and `BUILD_INFO`.
pub fn version_info(key: &str) -> Result<String> {
    let c_key = CString::new(key.as_bytes())?;
    Ok(_string(unsafe { gdal_glue_sys::GDALVersionInfo(c_key.as_ptr()) }))
}

/// `GDAL_VERSION_NUM` of the library loaded at run time.
pub fn runtime_version_num() -> Result<u32> {
    version_info("VERSION_NUM")?
        .trim()
        .parse::<u32>()
        .map_err(|e| crate::errors::GdalError::BadArgument(format!("VERSION_NUM: {e}")))
}

/// Selector for the properties `GDALVersionInfo` reports.
///
/// `Display` fetches the value from GDAL. [`VersionInfo::Report`] renders every
/// property except the license as a debug structure.
#[non_exhaustive]
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub enum VersionInfo {
    /// One line message, e.g. "GDAL 3.5.1, released 2022/06/30".
    #[default]
    Summary,
    Num,
    ReleaseDate,
    ReleaseName,
    License,
    /// `NAME=VALUE` lines describing build time options.
    BuildInfo,
    Report,
}

impl VersionInfo {
    pub fn all() -> [Self; 7] {
        use VersionInfo::*;
        [Summary, Num, ReleaseDate, ReleaseName, License, BuildInfo, Report]
    }

    pub fn name(&self) -> &'static str {
        match self {
            VersionInfo::Summary => "VERSION_SUMMARY",
            VersionInfo::Num => "VERSION_NUM",
            VersionInfo::ReleaseDate => "RELEASE_DATE",
            VersionInfo::ReleaseName => "RELEASE_NAME",
            VersionInfo::License => "LICENSE",
            VersionInfo::BuildInfo => "BUILD_INFO",
            VersionInfo::Report => "VERSION_REPORT",
        }
    }

    fn gdal_key(&self) -> Option<&'static str> {
        match self {
            VersionInfo::Summary => Some("--version"),
            VersionInfo::Report => None,
            other => Some(other.name()),
        }
    }

    fn value(&self) -> String {
        self.gdal_key()
            .and_then(|key| version_info(key).ok())
            .unwrap_or_default()
    }
}

impl Debug for VersionInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionInfo::Report => f
                .debug_struct("GDALVersionInfo")
                .field(VersionInfo::ReleaseName.name(), &VersionInfo::ReleaseName.value())
                .field(VersionInfo::ReleaseDate.name(), &VersionInfo::ReleaseDate.value())
                .field(VersionInfo::Num.name(), &VersionInfo::Num.value())
                .field(VersionInfo::BuildInfo.name(), &VersionInfo::BuildInfo)
                .finish(),
            VersionInfo::BuildInfo => {
                let mut builder = f.debug_struct("");
                let text = self.value();
                for (key, value) in text.lines().filter_map(|l| l.split_once('=')) {
                    builder.field(key, &value);
                }
                builder.finish()
            }
            other => f.debug_tuple(other.name()).field(&other.value()).finish(),
        }
    }
}

impl Display for VersionInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionInfo::Report => write!(f, "{self:#?}"),
            other => f.write_str(&other.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_matches_parts() {
        let release_date = version_info("RELEASE_DATE").unwrap();
        let release_name = version_info("RELEASE_NAME").unwrap();
        let mut date = release_date.chars();
        let expected = format!(
            "GDAL {}, released {}/{}/{}",
            release_name,
            date.by_ref().take(4).collect::<String>(),
            date.by_ref().take(2).collect::<String>(),
            date.by_ref().take(2).collect::<String>(),
        );
        assert_eq!(VersionInfo::Summary.to_string(), expected);
    }

    #[test]
    fn test_build_constants_match_runtime() {
        let runtime = runtime_version_num().unwrap();
        assert_eq!(VERSION_NUM / 10_000, VERSION_MAJOR * 100 + VERSION_MINOR);
        // the loaded library must at least share major and minor with the one we built against
        assert_eq!(runtime / 10_000, VERSION_NUM / 10_000);
    }

    #[test]
    fn test_report_contains_release_name() {
        let name = VersionInfo::ReleaseName.to_string();
        assert!(!name.is_empty());
        assert!(VersionInfo::Report.to_string().contains(&name));
        assert_eq!(VersionInfo::all().len(), 7);
    }

    #[test]
    fn test_nul_key_is_an_error() {
        assert!(version_info("VERSION\0NUM").is_err());
    }
}
