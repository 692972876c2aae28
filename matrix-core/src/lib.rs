//! # Matrix Core Library
//!
//! Provides the dense matrix value type, the arithmetic on it, and the
//! append-only results log used by the interactive workbench.

// Declare modules
pub mod dense_matrix;
pub mod error;
pub mod ops;
pub mod result_log;
pub mod traits;

// Re-export public types
pub use dense_matrix::DenseMatrix;
pub use error::{MatrixCoreError, Result};
pub use result_log::{ResultLog, DEFAULT_RESULTS_FILE};
pub use traits::Matrix;

use num_traits::Float;
use std::fmt::{Debug, Display};

// --- Method forms of the arithmetic in `ops` ---

impl<T: Float + Debug + Display> DenseMatrix<T> {
    /// Element-wise `self + other`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        ops::add(self, other)
    }

    /// Element-wise `self - other`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        ops::sub(self, other)
    }

    /// Matrix product `self * other`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        ops::multiply(self, other)
    }

    pub fn transpose(&self) -> Result<Self> {
        ops::transpose(self)
    }

    pub fn scalar_multiply(&self, scalar: T) -> Result<Self> {
        ops::scalar_multiply(self, scalar)
    }
}
