use crate::error::{MatrixCoreError, Result};
use crate::traits::Matrix;
use num_traits::Float;
use std::fmt::{self, Debug, Display};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Represents a dense matrix stored in row-major order.
///
/// Dimensions are fixed at construction and are always at least 1x1.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: Float + Debug + Display = f64> {
    rows: usize,
    cols: usize,
    data: Vec<T>, // Data stored row-major: data[row * cols + col]
}

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixCoreError::InvalidDimensions(format!(
            "Matrix must have at least one row and one column, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

impl<T: Float + Debug + Display> DenseMatrix<T> {
    /// Creates a new DenseMatrix filled with zeros.
    ///
    /// # Errors
    /// `InvalidDimensions` if either dimension is zero, `AllocationFailure` if
    /// the element count overflows or the storage cannot be reserved.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        check_dims(rows, cols)?;
        let len = rows.checked_mul(cols).ok_or_else(|| {
            MatrixCoreError::AllocationFailure(format!(
                "Element count of a {}x{} matrix overflows usize",
                rows, cols
            ))
        })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            MatrixCoreError::AllocationFailure(format!("{}x{} matrix: {}", rows, cols, e))
        })?;
        data.resize(len, T::zero());
        log::debug!("Created {}x{} matrix", rows, cols);
        Ok(Self { rows, cols, data })
    }

    /// Creates a new DenseMatrix from raw data, dimensions, assuming row-major order.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        check_dims(rows, cols)?;
        if Some(data.len()) != rows.checked_mul(cols) {
            return Err(MatrixCoreError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a DenseMatrix from a list of rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != cols) {
            return Err(MatrixCoreError::InvalidDimensions(
                "Input rows must all have the same length".to_string(),
            ));
        }
        let data = rows.iter().flatten().copied().collect();
        Self::new(rows.len(), cols, data)
    }

    /// Builds a matrix by evaluating `f(row, col)` for every element in row-major order.
    pub(crate) fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::zeros(rows, cols)?;
        for (idx, value) in m.data.iter_mut().enumerate() {
            *value = f(idx / cols, idx % cols);
        }
        Ok(m)
    }

    /// Assigns every element, in row-major order, from a stream of text tokens.
    ///
    /// Stops at the first token that is missing or not a number. The matrix is
    /// then only partially filled and should be discarded by the caller.
    pub fn fill<I>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        T: FromStr,
    {
        let expected = self.data.len();
        let mut tokens = tokens.into_iter();
        for (parsed, slot) in self.data.iter_mut().enumerate() {
            match tokens.next().and_then(|t| t.as_ref().trim().parse::<T>().ok()) {
                Some(value) => *slot = value,
                None => return Err(MatrixCoreError::InputTruncated { expected, parsed }),
            }
        }
        Ok(())
    }

    /// Returns a slice view of the underlying data vector.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns a mutable slice view of the underlying data vector.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns one row as a slice, or None if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Gets the element at the specified row and column (immutable).
    /// Returns None if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Gets the element at the specified row and column (mutable).
    /// Returns None if indices are out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Lazily renders the matrix one line per row, each value as `{:8.2}` plus a space.
    pub fn formatted_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.data.chunks(self.cols).map(|row| {
            row.iter()
                .map(|value| format!("{:8.2} ", value))
                .collect::<String>()
        })
    }
}

impl<T: Float + Debug + Display> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Float + Debug + Display> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Float + Debug + Display> Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.formatted_rows() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// Implement the generic Matrix trait
impl<T: Float + Debug + Display> Matrix for DenseMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // rows(), cols(), is_square(), same_size() are provided by default impls in the trait
}
