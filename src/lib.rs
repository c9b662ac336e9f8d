// Run Launcher Library
//
// Creates a timestamped run directory and hands it to an external training
// script started with fixed hyperparameters.

use chrono::NaiveDateTime;
use std::io;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Starts the external training process without waiting on it.
pub trait Spawner {
    fn spawn(&mut self, command: &TrainingCommand) -> io::Result<ProcessHandle>;
}

// Implementations
pub mod clock;
pub mod config;
pub mod error;
pub mod launcher;
pub mod run_dir;
pub mod training;

// Export the main types
pub use clock::{FixedClock, SystemClock};
pub use config::LauncherConfig;
pub use error::{LaunchError, Result};
pub use launcher::{Launch, Launcher, Outcome};
pub use run_dir::{DEFAULT_RESULTS_DIR, DirPolicy, RunDir, TIMESTAMP_FORMAT};
pub use training::{ProcessHandle, ProcessSpawner, TrainingCommand, TrainingConfig};
