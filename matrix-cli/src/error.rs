use derive_more::From;

use matrix_core::MatrixCoreError;

use crate::session::Slot;

pub type Result<T> = core::result::Result<T, CliError>;

#[derive(Debug, From)]
pub enum CliError {
    // -- Externals
    #[from]
    Io(std::io::Error),

    #[from]
    MatrixCore(MatrixCoreError),

    /// An operation needed a matrix slot that is empty.
    MissingOperand(Slot),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for CliError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::Io(e) => write!(fmt, "terminal I/O failed: {e}"),
            Self::MatrixCore(e) => write!(fmt, "{e}"),
            Self::MissingOperand(slot) => write!(fmt, "matrix {slot} is not initialized"),
        }
    }
}

impl std::error::Error for CliError {}

// endregion: --- Error Boilerplate
