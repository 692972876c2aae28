use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const BAR_WIDTH: usize = 30;

/// Text loading bar drawn in place with carriage returns.
#[derive(Debug, Clone, Copy)]
pub struct LoadingBar {
    width: usize,
    step_delay: Option<Duration>,
}

impl LoadingBar {
    /// A bar that sleeps `step_delay` between frames.
    pub fn animated(step_delay: Duration) -> Self {
        Self {
            width: BAR_WIDTH,
            step_delay: Some(step_delay),
        }
    }

    /// A bar that draws only its final, full frame.
    pub fn instant() -> Self {
        Self {
            width: BAR_WIDTH,
            step_delay: None,
        }
    }

    pub fn run<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", message)?;
        match self.step_delay {
            Some(delay) => {
                for filled in 0..=self.width {
                    self.draw_frame(out, filled)?;
                    out.flush()?;
                    thread::sleep(delay);
                }
            }
            None => self.draw_frame(out, self.width)?,
        }
        writeln!(out)
    }

    fn draw_frame<W: Write>(&self, out: &mut W, filled: usize) -> io::Result<()> {
        let percent = filled * 100 / self.width;
        write!(
            out,
            "\r[{}{}] {:3}%",
            "#".repeat(filled),
            " ".repeat(self.width - filled),
            percent
        )
    }
}

/// Holds output on screen for a moment; zero skips the wait.
pub fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
