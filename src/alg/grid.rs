use std::ffi::CString;
use std::fmt::{Display, Formatter};
use std::ptr;

use gdal_glue_sys::{CPLErr, GDALGridAlgorithm, GUInt32};
use libc::c_void;

use crate::errors::*;
use crate::progress::Progress;
use crate::raster::{Buffer, GdalType};
use crate::utils::{_cpl_result, _last_cpl_err};

/// Interpolation or metric computed for every grid node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAlgorithmKind {
    InverseDistanceToAPower,
    InverseDistanceToAPowerNearestNeighbor,
    MovingAverage,
    NearestNeighbor,
    Minimum,
    Maximum,
    Range,
    Count,
    AverageDistance,
    AverageDistancePts,
    Linear,
}

impl GridAlgorithmKind {
    /// Name understood by `gdal_grid -a`.
    pub fn name(&self) -> &'static str {
        match self {
            GridAlgorithmKind::InverseDistanceToAPower => "invdist",
            GridAlgorithmKind::InverseDistanceToAPowerNearestNeighbor => "invdistnn",
            GridAlgorithmKind::MovingAverage => "average",
            GridAlgorithmKind::NearestNeighbor => "nearest",
            GridAlgorithmKind::Minimum => "minimum",
            GridAlgorithmKind::Maximum => "maximum",
            GridAlgorithmKind::Range => "range",
            GridAlgorithmKind::Count => "count",
            GridAlgorithmKind::AverageDistance => "average_distance",
            GridAlgorithmKind::AverageDistancePts => "average_distance_pts",
            GridAlgorithmKind::Linear => "linear",
        }
    }
}

/// An algorithm with its `key=value` parameters, rendered as
/// `name:key=value:...` for `GDALGridParseAlgorithmAndOptions`.
///
/// ```rust, no_run
/// use gdal_glue::alg::{GridAlgorithm, GridAlgorithmKind};
///
/// let algorithm = GridAlgorithm::new(GridAlgorithmKind::InverseDistanceToAPower)
///     .with_option("power", "3")
///     .with_option("smoothing", "1");
/// assert_eq!(algorithm.to_string(), "invdist:power=3:smoothing=1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridAlgorithm {
    kind: GridAlgorithmKind,
    options: Vec<(String, String)>,
}

impl GridAlgorithm {
    pub fn new(kind: GridAlgorithmKind) -> Self {
        GridAlgorithm {
            kind,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: &str) -> Self {
        self.options.push((key.to_string(), value.to_string()));
        self
    }

    pub fn kind(&self) -> GridAlgorithmKind {
        self.kind
    }
}

impl Display for GridAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.name())?;
        for (key, value) in &self.options {
            write!(f, ":{key}={value}")?;
        }
        Ok(())
    }
}

/// Georeferenced bounds of the output grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl GridExtent {
    /// Bounding box of the points, `None` for no points.
    fn from_points(x: &[f64], y: &[f64]) -> Option<GridExtent> {
        if x.is_empty() {
            return None;
        }
        let (x_min, x_max) = x
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let (y_min, y_max) = y
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Some(GridExtent {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

struct ParsedOptions(*mut c_void);

impl Drop for ParsedOptions {
    fn drop(&mut self) {
        unsafe { gdal_glue_sys::VSIFree(self.0) };
    }
}

/// Interpolates the scattered points `(x, y, z)` onto a regular grid of
/// `size` `(columns, rows)` nodes.
///
/// Without `extent` the grid spans the bounding box of the points. The first
/// row of the result lies at `y_min`.
pub fn create_grid<T: GdalType + Copy + Default>(
    algorithm: &GridAlgorithm,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    extent: Option<GridExtent>,
    size: (usize, usize),
    progress: &mut Progress<'_>,
) -> Result<Buffer<T>> {
    if x.len() != y.len() || x.len() != z.len() {
        return Err(GdalError::BadArgument(format!(
            "coordinate slices differ in length: x {}, y {}, z {}",
            x.len(),
            y.len(),
            z.len()
        )));
    }
    let n_points = GUInt32::try_from(x.len())
        .map_err(|_| GdalError::BadArgument(format!("{} points is too many", x.len())))?;
    let extent = match extent {
        Some(extent) => extent,
        None => GridExtent::from_points(x, y).ok_or_else(|| {
            GdalError::BadArgument("no points to derive a grid extent from".into())
        })?,
    };
    let size_x = GUInt32::try_from(size.0)
        .map_err(|_| GdalError::BadArgument(format!("grid width {} is too large", size.0)))?;
    let size_y = GUInt32::try_from(size.1)
        .map_err(|_| GdalError::BadArgument(format!("grid height {} is too large", size.1)))?;
    let pixels = size
        .0
        .checked_mul(size.1)
        .ok_or_else(|| GdalError::BadArgument(format!("grid size {size:?} overflows")))?;

    let c_algorithm = CString::new(algorithm.to_string())?;
    let mut c_kind: GDALGridAlgorithm::Type = 0;
    let mut c_options: *mut c_void = ptr::null_mut();
    let rv = unsafe {
        gdal_glue_sys::GDALGridParseAlgorithmAndOptions(
            c_algorithm.as_ptr(),
            &mut c_kind,
            &mut c_options,
        )
    };
    if rv != CPLErr::CE_None {
        return Err(_last_cpl_err(rv));
    }
    let options = ParsedOptions(c_options);

    let mut data = vec![T::default(); pixels];
    let (func, progress_data) = progress.as_raw();
    let rv = unsafe {
        gdal_glue_sys::GDALGridCreate(
            c_kind,
            options.0,
            n_points,
            x.as_ptr(),
            y.as_ptr(),
            z.as_ptr(),
            extent.x_min,
            extent.x_max,
            extent.y_min,
            extent.y_max,
            size_x,
            size_y,
            T::gdal_type(),
            data.as_mut_ptr() as *mut c_void,
            func,
            progress_data,
        )
    };
    _cpl_result(rv)?;
    Ok(Buffer { size, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [f64; 4] = [0.0, 10.0, 0.0, 10.0];
    const Y: [f64; 4] = [0.0, 0.0, 10.0, 10.0];

    #[test]
    fn test_algorithm_string() {
        assert_eq!(GridAlgorithm::new(GridAlgorithmKind::Linear).to_string(), "linear");
        assert_eq!(
            GridAlgorithm::new(GridAlgorithmKind::NearestNeighbor)
                .with_option("radius1", "2.5")
                .with_option("nodata", "-1")
                .to_string(),
            "nearest:radius1=2.5:nodata=-1"
        );
    }

    #[test]
    fn test_inverse_distance_of_constant() {
        let z = [5.0; 4];
        let algorithm = GridAlgorithm::new(GridAlgorithmKind::InverseDistanceToAPower);
        let grid = create_grid::<f64>(
            &algorithm,
            &X,
            &Y,
            &z,
            None,
            (3, 3),
            &mut Progress::none(),
        )
        .unwrap();
        assert_eq!(grid.size, (3, 3));
        assert!(grid.data.iter().all(|v| (v - 5.0).abs() < 1e-5));
    }

    #[test]
    fn test_nearest_neighbor_rows_start_at_y_min() {
        let z = [1.0, 2.0, 3.0, 4.0];
        let algorithm = GridAlgorithm::new(GridAlgorithmKind::NearestNeighbor);
        let extent = GridExtent {
            x_min: -5.0,
            x_max: 15.0,
            y_min: -5.0,
            y_max: 15.0,
        };
        let mut ticks = 0;
        let mut progress = Progress::new(|_, _| {
            ticks += 1;
            true
        });
        let grid = create_grid::<f32>(
            &algorithm,
            &X,
            &Y,
            &z,
            Some(extent),
            (2, 2),
            &mut progress,
        )
        .unwrap();
        drop(progress);
        assert!(ticks > 0);
        assert_eq!(grid.data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_unequal_lengths() {
        let algorithm = GridAlgorithm::new(GridAlgorithmKind::Count);
        let result = create_grid::<f64>(
            &algorithm,
            &X,
            &Y,
            &[1.0],
            None,
            (2, 2),
            &mut Progress::none(),
        );
        assert!(matches!(result, Err(GdalError::BadArgument(_))));
    }

    #[test]
    fn test_no_points_without_extent() {
        let algorithm = GridAlgorithm::new(GridAlgorithmKind::Count);
        let result = create_grid::<f64>(
            &algorithm,
            &[],
            &[],
            &[],
            None,
            (2, 2),
            &mut Progress::none(),
        );
        assert!(matches!(result, Err(GdalError::BadArgument(_))));
    }
}
