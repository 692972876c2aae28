use num_traits::Float;
use std::fmt::{Debug, Display};

/// Generic trait representing a matrix.
/// Implementations only need to report their shape; element access lives on the
/// concrete type.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f64, f32).
    type Value: Float + Debug + Display;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// Returns true iff both matrices have equal rows and equal columns.
    fn same_size<M: Matrix + ?Sized>(&self, other: &M) -> bool {
        self.dims() == other.dims()
    }
}
