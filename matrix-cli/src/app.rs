use std::io::{BufRead, Write};

use matrix_core::{DenseMatrix, Matrix, MatrixCoreError, ResultLog};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::{Parsed, TokenReader};
use crate::progress::{self, LoadingBar};
use crate::session::{Session, Slot};

/// Largest row or column count accepted from the console.
pub const MAX_DIMENSION: usize = 100;

const MENU: &str = "\
=== Program za rad sa matricama ===
1) Unesi matricu A
2) Unesi matricu B
3) Ispisi matricu A
4) Ispisi matricu B
5) A + B
6) A - B
7) A * B
8) Transponuj A
9) Transponuj B
10) Pomnozi A skalarnim
11) Pomnozi B skalarnim
12) Oslobodi A
13) Oslobodi B
14) Prikazi sacuvane rezultate
15) Obrisi sve sacuvane rezultate
0) Izlaz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Multiply,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Multiply => "*",
        }
    }

    fn progress_message(self) -> &'static str {
        match self {
            BinaryOp::Add => "Sabiranje...",
            BinaryOp::Sub => "Oduzimanje...",
            BinaryOp::Multiply => "Mnozenje...",
        }
    }

    fn mismatch_message(self) -> &'static str {
        match self {
            BinaryOp::Add | BinaryOp::Sub => "Greska: matrice nisu iste dimenzije.",
            BinaryOp::Multiply => {
                "Greska: neodgovarajuce dimenzije za mnozenje (A.cols must == B.rows)."
            }
        }
    }

    fn apply(self, a: &DenseMatrix, b: &DenseMatrix) -> matrix_core::Result<DenseMatrix> {
        match self {
            BinaryOp::Add => a.add(b),
            BinaryOp::Sub => a.sub(b),
            BinaryOp::Multiply => a.multiply(b),
        }
    }
}

/// The interactive menu loop.
///
/// Generic over its input and output so it can be driven by a terminal or by
/// in-memory buffers.
pub struct App<R, W> {
    input: TokenReader<R>,
    out: W,
    session: Session,
    results: ResultLog,
    loading_bar: LoadingBar,
    config: Config,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, out: W, config: Config) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            session: Session::new(),
            results: ResultLog::new(config.results_file.clone()),
            loading_bar: config.loading_bar(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until the user picks `0` or input ends.
    ///
    /// # Errors
    /// Only terminal I/O failures end the loop with an error; every matrix or
    /// results-file problem is reported to the user and the menu continues.
    pub fn run(&mut self) -> Result<()> {
        log::debug!("Results file: {}", self.results.path().display());
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;
            write!(self.out, "Izbor: ")?;
            self.out.flush()?;

            let choice = match self.input.next_value::<i64>()? {
                Parsed::Value(choice) => choice,
                Parsed::Invalid(token) => {
                    log::warn!("Rejected menu choice '{}'", token);
                    writeln!(self.out, "Nevalidan unos.")?;
                    continue;
                }
                Parsed::Eof => {
                    log::debug!("Input closed, leaving menu loop");
                    writeln!(self.out, "Izlaz.")?;
                    return Ok(());
                }
            };
            writeln!(self.out)?;

            match choice {
                1 => self.enter_matrix(Slot::A)?,
                2 => self.enter_matrix(Slot::B)?,
                3 => self.print_matrix(Slot::A)?,
                4 => self.print_matrix(Slot::B)?,
                5 => self.binary(BinaryOp::Add)?,
                6 => self.binary(BinaryOp::Sub)?,
                7 => self.binary(BinaryOp::Multiply)?,
                8 => self.transpose(Slot::A)?,
                9 => self.transpose(Slot::B)?,
                10 => self.scale(Slot::A)?,
                11 => self.scale(Slot::B)?,
                12 => self.release(Slot::A)?,
                13 => self.release(Slot::B)?,
                14 => self.show_saved_results()?,
                15 => self.clear_saved_results()?,
                0 => {
                    writeln!(self.out, "Izlaz.")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Nepoznata opcija.")?,
            }
        }
    }

    fn not_initialized(&mut self, slot: Slot) -> Result<()> {
        writeln!(self.out, "Matrica {} nije inicijalizovana.", slot)?;
        Ok(())
    }

    fn enter_matrix(&mut self, slot: Slot) -> Result<()> {
        self.session.release(slot);
        if let Some(matrix) = self.read_matrix()? {
            log::debug!("Stored {}x{} matrix in slot {}", matrix.rows(), matrix.cols(), slot);
            self.session.store(slot, matrix);
        }
        Ok(())
    }

    fn prompt_dimension(&mut self, prompt: &str) -> Result<Option<usize>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        match self.input.next_value::<usize>()? {
            Parsed::Value(n) => Ok(Some(n)),
            Parsed::Invalid(token) => {
                log::warn!("Rejected dimension '{}'", token);
                writeln!(self.out, "Nevalidan unos.")?;
                Ok(None)
            }
            Parsed::Eof => Ok(None),
        }
    }

    fn read_matrix(&mut self) -> Result<Option<DenseMatrix>> {
        let Some(rows) = self.prompt_dimension("Unesite broj redova: ")? else {
            return Ok(None);
        };
        let Some(cols) = self.prompt_dimension("Unesite broj kolona: ")? else {
            return Ok(None);
        };
        let bounds = 1..=MAX_DIMENSION;
        if !bounds.contains(&rows) || !bounds.contains(&cols) {
            log::warn!("Rejected dimensions {}x{}", rows, cols);
            writeln!(
                self.out,
                "Nevalidne dimenzije (1 - {}), unesite nove dimenzije.",
                MAX_DIMENSION
            )?;
            return Ok(None);
        }

        let mut matrix = match DenseMatrix::<f64>::zeros(rows, cols) {
            Ok(matrix) => matrix,
            Err(e) => {
                log::error!("Could not create {}x{} matrix: {}", rows, cols, e);
                writeln!(self.out, "Greska pri alokaciji matrice.")?;
                return Ok(None);
            }
        };

        writeln!(
            self.out,
            "Unesite elemente matrice {}x{} (redosled po redovima):",
            rows, cols
        )?;
        let mut io_error = None;
        let filled = {
            let Self { input, out, .. } = self;
            let mut index = 0;
            let tokens = std::iter::from_fn(|| {
                let (i, j) = (index / cols, index % cols);
                index += 1;
                let prompted = write!(out, "m[{}][{}] = ", i, j).and_then(|_| out.flush());
                match prompted.and_then(|_| input.next_token()) {
                    Ok(token) => token,
                    Err(e) => {
                        io_error = Some(e);
                        None
                    }
                }
            });
            matrix.fill(tokens)
        };
        if let Some(e) = io_error {
            return Err(e.into());
        }
        match filled {
            Ok(()) => Ok(Some(matrix)),
            Err(e) => {
                log::warn!("Discarding partially entered matrix: {}", e);
                self.input.discard_line();
                writeln!(self.out)?;
                writeln!(self.out, "Greska pri unosu.")?;
                Ok(None)
            }
        }
    }

    fn print_matrix(&mut self, slot: Slot) -> Result<()> {
        match self.session.get(slot) {
            Some(matrix) => {
                write!(self.out, "{}", matrix)?;
                self.out.flush()?;
                progress::pause(self.config.pause);
                Ok(())
            }
            None => self.not_initialized(slot),
        }
    }

    fn compute(&self, op: BinaryOp) -> Result<DenseMatrix> {
        let (a, b) = self.session.both().map_err(CliError::MissingOperand)?;
        Ok(op.apply(a, b)?)
    }

    fn binary(&mut self, op: BinaryOp) -> Result<()> {
        match self.compute(op) {
            Ok(result) => {
                let label = format!("A {} B", op.symbol());
                let heading = format!("{} =", label);
                self.present(result, op.progress_message(), &heading, &label)
            }
            Err(CliError::MissingOperand(slot)) => {
                log::debug!("Binary operation without matrix {}", slot);
                writeln!(self.out, "Potrebne su obe matrice A i B.")?;
                Ok(())
            }
            Err(CliError::MatrixCore(MatrixCoreError::DimensionMismatch { op: name, left, right })) => {
                log::warn!("{} rejected: {:?} vs {:?}", name, left, right);
                writeln!(self.out, "{}", op.mismatch_message())?;
                Ok(())
            }
            Err(CliError::MatrixCore(e)) => {
                log::error!("Operation A {} B failed: {}", op.symbol(), e);
                writeln!(self.out, "Greska: {}", e)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn transpose(&mut self, slot: Slot) -> Result<()> {
        let Some(matrix) = self.session.get(slot) else {
            return self.not_initialized(slot);
        };
        match matrix.transpose() {
            Ok(result) => self.present(
                result,
                &format!("Transponovanje {} matrice...", slot),
                &format!("{}^T =", slot),
                &format!("{}^T (Transponovanje {})", slot, slot),
            ),
            Err(e) => {
                log::error!("Transpose of {} failed: {}", slot, e);
                writeln!(self.out, "Greska: {}", e)?;
                Ok(())
            }
        }
    }

    fn scale(&mut self, slot: Slot) -> Result<()> {
        if self.session.get(slot).is_none() {
            return self.not_initialized(slot);
        }
        write!(self.out, "Unesite skalar: ")?;
        self.out.flush()?;
        let scalar = match self.input.next_value::<f64>()? {
            Parsed::Value(s) => s,
            Parsed::Invalid(token) => {
                log::warn!("Rejected scalar '{}'", token);
                writeln!(self.out, "Nevalidan unos.")?;
                return Ok(());
            }
            Parsed::Eof => return Ok(()),
        };
        let result = match self.session.get(slot).map(|m| m.scalar_multiply(scalar)) {
            Some(Ok(result)) => result,
            Some(Err(e)) => {
                log::error!("Scaling {} failed: {}", slot, e);
                writeln!(self.out, "Greska: {}", e)?;
                return Ok(());
            }
            None => return self.not_initialized(slot),
        };
        self.present(
            result,
            &format!("Skaliranje {} matrice...", slot),
            &format!("{} * {} =", slot, scalar),
            &format!("{} * {:.2} (Skaliranje {})", slot, scalar, slot),
        )
    }

    /// Animates, prints, offers to save, then drops `result`.
    fn present(
        &mut self,
        result: DenseMatrix,
        progress_message: &str,
        heading: &str,
        label: &str,
    ) -> Result<()> {
        self.loading_bar.run(&mut self.out, progress_message)?;
        writeln!(self.out, "{}", heading)?;
        write!(self.out, "{}", result)?;
        self.offer_save(&result, label)?;
        progress::pause(self.config.pause);
        Ok(())
    }

    fn confirmed(&mut self, prompt: &str) -> Result<bool> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let answer = self.input.next_token()?;
        Ok(matches!(
            answer.as_deref().and_then(|a| a.chars().next()),
            Some('d') | Some('D')
        ))
    }

    fn offer_save(&mut self, result: &DenseMatrix, label: &str) -> Result<()> {
        if !self.confirmed("Da li zelite da sacuvate rezultat u fajl? (d/n): ")? {
            return Ok(());
        }
        match self.results.append_result(result, label) {
            Ok(()) => writeln!(
                self.out,
                "Rezultat je sacuvan u fajl {}.",
                self.results.path().display()
            )?,
            Err(e) => {
                log::error!("Saving '{}' failed: {}", label, e);
                writeln!(self.out, "Greska pri cuvanju rezultata: {}", e)?;
            }
        }
        Ok(())
    }

    fn release(&mut self, slot: Slot) -> Result<()> {
        if self.session.release(slot) {
            writeln!(self.out, "Matrica {} je oslobodjena.", slot)?;
            Ok(())
        } else {
            self.not_initialized(slot)
        }
    }

    fn show_saved_results(&mut self) -> Result<()> {
        match self.results.read_all() {
            Ok(Some(text)) if text.is_empty() => {
                writeln!(self.out, "Nema sacuvanih rezultata.")?;
            }
            Ok(Some(text)) => {
                writeln!(self.out, "=== Sacuvani rezultati ===")?;
                write!(self.out, "{}", text)?;
            }
            Ok(None) => {
                writeln!(
                    self.out,
                    "Fajl {} ne postoji.",
                    self.results.path().display()
                )?;
            }
            Err(e) => {
                log::error!("Reading {} failed: {}", self.results.path().display(), e);
                writeln!(self.out, "Greska pri citanju fajla: {}", e)?;
            }
        }
        write!(self.out, "\nPritisnite Enter za nastavak...")?;
        self.out.flush()?;
        self.input.wait_for_line()?;
        Ok(())
    }

    fn clear_saved_results(&mut self) -> Result<()> {
        if !self.confirmed(
            "Da li ste sigurni da zelite da obrisete sve sacuvane rezultate? (d/n): ",
        )? {
            writeln!(self.out, "Brisanje je otkazano.")?;
            return Ok(());
        }
        match self.results.clear_all() {
            Ok(()) => writeln!(self.out, "Svi sacuvani rezultati su obrisani.")?,
            Err(e) => {
                log::error!("Clearing {} failed: {}", self.results.path().display(), e);
                writeln!(self.out, "Greska pri brisanju rezultata: {}", e)?;
            }
        }
        Ok(())
    }
}
