use crate::errors::{GdalError, Result};
use crate::raster::GdalType;

#[cfg(feature = "ndarray")]
use ndarray::Array2;

/// Pixel values of a raster window, row-major, with their `(columns, rows)` size.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer<T> {
    pub size: (usize, usize),
    pub data: Vec<T>,
}

impl<T: GdalType> Buffer<T> {
    /// Fails when `data` does not hold exactly `size.0 * size.1` values.
    pub fn new(size: (usize, usize), data: Vec<T>) -> Result<Self> {
        if size.0.checked_mul(size.1) != Some(data.len()) {
            return Err(GdalError::BadArgument(format!(
                "buffer size {size:?} does not match {} values",
                data.len()
            )));
        }
        Ok(Buffer { size, data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `ndarray` shapes are `(rows, columns)`.
    #[cfg(feature = "ndarray")]
    pub fn to_array(self) -> Result<Array2<T>> {
        Ok(Array2::from_shape_vec((self.size.1, self.size.0), self.data)?)
    }
}

pub type ByteBuffer = Buffer<u8>;

#[cfg(feature = "ndarray")]
impl<T: GdalType + Copy> From<Array2<T>> for Buffer<T> {
    fn from(value: Array2<T>) -> Self {
        let (rows, cols) = value.dim();
        let data = value.as_standard_layout().iter().copied().collect();
        Buffer { size: (cols, rows), data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_size() {
        assert_eq!(Buffer::new((3, 2), vec![0u8; 6]).unwrap().len(), 6);
        assert!(matches!(
            Buffer::new((3, 2), vec![0u8; 5]),
            Err(GdalError::BadArgument(_))
        ));
        assert!(Buffer::new((usize::MAX, 2), Vec::<u8>::new()).is_err());
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_array_layout() {
        let buffer = Buffer::new((3, 2), vec![1i32, 2, 3, 4, 5, 6]).unwrap();
        let array = buffer.clone().to_array().unwrap();
        assert_eq!(array.dim(), (2, 3));
        assert_eq!(array[[1, 0]], 4);
        assert_eq!(Buffer::from(array), buffer);
    }
}
