//! Interactive console front end for `matrix-core`.
//!
//! Holds everything that talks to the terminal: the menu loop, prompts,
//! token parsing, the loading bar and the A/B session.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod progress;
pub mod session;

pub use app::App;
pub use config::Config;
pub use error::CliError;
pub use session::{Session, Slot};
