use std::fmt;

use matrix_core::DenseMatrix;

/// One of the two operand slots the user can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => f.write_str("A"),
            Slot::B => f.write_str("B"),
        }
    }
}

/// Matrices A and B for the lifetime of one interactive run.
#[derive(Debug, Default)]
pub struct Session {
    a: Option<DenseMatrix>,
    b: Option<DenseMatrix>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<DenseMatrix> {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&DenseMatrix> {
        match slot {
            Slot::A => self.a.as_ref(),
            Slot::B => self.b.as_ref(),
        }
    }

    /// Stores `matrix` in `slot`, returning whatever was there before.
    pub fn store(&mut self, slot: Slot, matrix: DenseMatrix) -> Option<DenseMatrix> {
        self.slot_mut(slot).replace(matrix)
    }

    /// Empties `slot`. Returns false if it was already empty.
    pub fn release(&mut self, slot: Slot) -> bool {
        self.slot_mut(slot).take().is_some()
    }

    /// Both operands, or the first slot that is missing.
    pub fn both(&self) -> Result<(&DenseMatrix, &DenseMatrix), Slot> {
        match (&self.a, &self.b) {
            (Some(a), Some(b)) => Ok((a, b)),
            (None, _) => Err(Slot::A),
            (_, None) => Err(Slot::B),
        }
    }
}
