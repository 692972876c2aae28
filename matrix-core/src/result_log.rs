use crate::dense_matrix::DenseMatrix;
use crate::error::Result;
use crate::traits::Matrix;
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name used when the caller does not choose one.
pub const DEFAULT_RESULTS_FILE: &str = "matrix_results.txt";

const SEPARATOR: &str = "========================================";
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Append-only, human-readable transcript of computed matrices.
///
/// Each record looks like:
///
/// ```text
/// ========================================
/// Operacija: A + B
/// Vreme: Mon Oct 19 14:02:11 2026
/// Dimenzije: 2x2
/// ========================================
///     6.00     8.00
///    10.00    12.00
///
/// ```
///
/// Single writer per file is assumed; no locking is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLog {
    path: PathBuf,
}

impl Default for ResultLog {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_FILE)
    }
}

impl ResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record for `matrix`, creating the file if needed.
    pub fn append_result<T: Float + Debug + Display>(
        &self,
        matrix: &DenseMatrix<T>,
        operation: &str,
    ) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut out = BufWriter::new(file);
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        write_record(&mut out, matrix, operation, &timestamp.to_string())?;
        out.flush()?;
        log::info!(
            "Saved {}x{} result of '{}' to {}",
            matrix.rows(),
            matrix.cols(),
            operation,
            self.path.display()
        );
        Ok(())
    }

    /// Truncates the log to empty, creating it if it does not exist.
    pub fn clear_all(&self) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        log::info!("Cleared saved results in {}", self.path.display());
        Ok(())
    }

    /// Reads the whole log.
    ///
    /// Returns `Ok(None)` when the file does not exist and `Ok(Some(""))` when
    /// it exists but holds no records.
    pub fn read_all(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn write_record<W: Write, T: Float + Debug + Display>(
    out: &mut W,
    matrix: &DenseMatrix<T>,
    operation: &str,
    timestamp: &str,
) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Operacija: {}", operation)?;
    writeln!(out, "Vreme: {}", timestamp)?;
    writeln!(out, "Dimenzije: {}x{}", matrix.rows(), matrix.cols())?;
    writeln!(out, "{}", SEPARATOR)?;
    for line in matrix.formatted_rows() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)
}
