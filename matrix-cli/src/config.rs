use std::path::PathBuf;
use std::time::Duration;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use matrix_core::DEFAULT_RESULTS_FILE;

use crate::progress::LoadingBar;

const STEP_DELAY: Duration = Duration::from_millis(100);
const DEFAULT_PAUSE_MS: u64 = 2000;

/// Runtime settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where saved results are appended.
    pub results_file: PathBuf,
    /// Animate the loading bar frame by frame.
    pub animate: bool,
    /// How long printed results stay on screen before the menu returns.
    pub pause: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_file: PathBuf::from(DEFAULT_RESULTS_FILE),
            animate: true,
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
        }
    }
}

impl Config {
    /// Settings with no animation and no pauses, for scripted input.
    pub fn non_interactive(results_file: impl Into<PathBuf>) -> Self {
        Self {
            results_file: results_file.into(),
            animate: false,
            pause: Duration::ZERO,
        }
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let results_file = matches
            .get_one::<PathBuf>("results_file")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_FILE));
        let pause_ms = matches
            .get_one::<u64>("pause_ms")
            .copied()
            .unwrap_or(DEFAULT_PAUSE_MS);
        Self {
            results_file,
            animate: !matches.get_flag("no_animation"),
            pause: Duration::from_millis(pause_ms),
        }
    }

    pub fn loading_bar(&self) -> LoadingBar {
        if self.animate {
            LoadingBar::animated(STEP_DELAY)
        } else {
            LoadingBar::instant()
        }
    }
}

pub fn command() -> Command {
    Command::new("matrix-cli")
        .version(clap::crate_version!())
        .about("Interactive workbench for matrix addition, subtraction, multiplication, transpose and scaling")
        .arg(
            Arg::new("results_file")
                .short('f')
                .long("results-file")
                .env("MATRIX_RESULTS_FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath)
                .default_value(DEFAULT_RESULTS_FILE)
                .help("File that saved results are appended to"),
        )
        .arg(
            Arg::new("no_animation")
                .long("no-animation")
                .action(ArgAction::SetTrue)
                .help("Draw the loading bar without delays"),
        )
        .arg(
            Arg::new("pause_ms")
                .long("pause-ms")
                .value_parser(clap::value_parser!(u64))
                .default_value("2000")
                .help("Milliseconds to keep results on screen (0 disables the pause)"),
        )
}
