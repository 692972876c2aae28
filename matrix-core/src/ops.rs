// Arithmetic on dense matrices.
// Every function borrows its operands and returns a freshly allocated result;
// the same operations are exposed as methods on DenseMatrix in lib.rs.

use crate::{
    dense_matrix::DenseMatrix,
    error::{MatrixCoreError, Result},
    traits::Matrix,
};
use num_traits::Float;
use std::fmt::{Debug, Display};

fn ensure_same_size<T: Float + Debug + Display>(
    op: &'static str,
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<()> {
    if !a.same_size(b) {
        return Err(MatrixCoreError::DimensionMismatch {
            op,
            left: a.dims(),
            right: b.dims(),
        });
    }
    Ok(())
}

fn zip_with<T, F>(a: &DenseMatrix<T>, b: &DenseMatrix<T>, f: F) -> Result<DenseMatrix<T>>
where
    T: Float + Debug + Display,
    F: Fn(T, T) -> T,
{
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| f(x, y))
        .collect();
    DenseMatrix::new(a.rows(), a.cols(), data)
}

/// Element-wise sum `a + b`.
///
/// # Errors
/// `DimensionMismatch` unless both operands have the same shape.
pub fn add<T: Float + Debug + Display>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    ensure_same_size("add", a, b)?;
    zip_with(a, b, |x, y| x + y)
}

/// Element-wise difference `a - b`.
///
/// # Errors
/// `DimensionMismatch` unless both operands have the same shape.
pub fn sub<T: Float + Debug + Display>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    ensure_same_size("sub", a, b)?;
    zip_with(a, b, |x, y| x - y)
}

/// Matrix product `a * b`, shaped `a.rows x b.cols`.
///
/// Each entry is summed sequentially for k = 0..a.cols, so results are
/// reproducible bit for bit.
///
/// # Errors
/// `DimensionMismatch` unless `a.cols == b.rows`.
pub fn multiply<T: Float + Debug + Display>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>> {
    if a.cols() != b.rows() {
        return Err(MatrixCoreError::DimensionMismatch {
            op: "multiply",
            left: a.dims(),
            right: b.dims(),
        });
    }
    let (inner, b_cols) = (a.cols(), b.cols());
    let (a_data, b_data) = (a.data(), b.data());
    log::debug!(
        "Multiplying {}x{} by {}x{}",
        a.rows(),
        inner,
        b.rows(),
        b_cols
    );
    DenseMatrix::from_fn(a.rows(), b_cols, |i, j| {
        let mut sum = T::zero();
        for k in 0..inner {
            sum = sum + a_data[i * inner + k] * b_data[k * b_cols + j];
        }
        sum
    })
}

/// Transpose of `a`, shaped `a.cols x a.rows`.
pub fn transpose<T: Float + Debug + Display>(a: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
    let cols = a.cols();
    let data = a.data();
    DenseMatrix::from_fn(cols, a.rows(), |j, i| data[i * cols + j])
}

/// Multiplies every element of `a` by `scalar`.
pub fn scalar_multiply<T: Float + Debug + Display>(
    a: &DenseMatrix<T>,
    scalar: T,
) -> Result<DenseMatrix<T>> {
    let data = a.data().iter().map(|&x| x * scalar).collect();
    DenseMatrix::new(a.rows(), a.cols(), data)
}
