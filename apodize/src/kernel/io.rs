use super::ConfigError;

use ndarray::{Array1, ArrayView1, ArrayViewMut1};

/// Adapter trait for reading contiguous 1D input, e.g. window samples handed
/// to a metric kernel.
pub trait Read1D<T> {
    /// Borrow the underlying input as a contiguous slice.
    fn read_slice(&self) -> Result<&[T], ConfigError>;
}

/// Adapter trait for writing contiguous 1D output, e.g. a caller-owned
/// buffer a window is generated into.
pub trait Write1D<T> {
    /// Borrow the underlying output as a mutable contiguous slice.
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError>;
}

impl<T> Read1D<T> for [T] {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T> Write1D<T> for [T] {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> Read1D<T> for [T; N] {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self)
    }
}

impl<T, const N: usize> Write1D<T> for [T; N] {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self)
    }
}

impl<T> Read1D<T> for Vec<T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        Ok(self.as_slice())
    }
}

impl<T> Write1D<T> for Vec<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        Ok(self.as_mut_slice())
    }
}

// Strided ndarray views (e.g. `a.slice(s![..;2])`) have no slice form and
// are rejected rather than copied.
impl<T> Read1D<T> for Array1<T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

impl<T> Write1D<T> for Array1<T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut()
            .ok_or(ConfigError::NonContiguous { arg: "array" })
    }
}

impl<T> Read1D<T> for ArrayView1<'_, T> {
    fn read_slice(&self) -> Result<&[T], ConfigError> {
        self.as_slice()
            .ok_or(ConfigError::NonContiguous { arg: "array_view" })
    }
}

impl<T> Write1D<T> for ArrayViewMut1<'_, T> {
    fn write_slice_mut(&mut self) -> Result<&mut [T], ConfigError> {
        self.as_slice_mut().ok_or(ConfigError::NonContiguous {
            arg: "array_view_mut",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Read1D, Write1D};
    use ndarray::{s, Array1};

    #[test]
    fn std_containers_expose_slices() {
        let samples = [0.0f64, 0.5, 1.0, 0.5];
        assert_eq!(samples.read_slice().expect("array adapter")[2], 1.0);

        let mut out = vec![0.0f64; 3];
        out.write_slice_mut()
            .expect("vec adapter")
            .copy_from_slice(&[0.25, 1.0, 0.25]);
        assert_eq!(out, vec![0.25, 1.0, 0.25]);
    }

    #[test]
    fn ndarray_contiguous_and_strided_views() {
        let arr = Array1::linspace(0.0f64, 1.0, 5);
        assert_eq!(arr.read_slice().expect("array1 read").len(), 5);
        assert_eq!(arr.view().read_slice().expect("view read")[4], 1.0);

        let strided = arr.slice(s![..;2]);
        assert_eq!(
            strided.read_slice().unwrap_err(),
            ConfigError::NonContiguous { arg: "array_view" }
        );

        let mut out = Array1::zeros(4);
        out.write_slice_mut()
            .expect("array1 write")
            .copy_from_slice(&[1.0f64, 2.0, 3.0, 4.0]);
        assert_eq!(out.as_slice().expect("slice"), &[1.0, 2.0, 3.0, 4.0]);
    }
}
