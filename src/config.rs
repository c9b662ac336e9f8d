use crate::run_dir::{DEFAULT_RESULTS_DIR, DirPolicy};
use std::path::PathBuf;

/// Where the training script lives and how a launch behaves.
///
/// The defaults reproduce a plain `mkdir` followed by a background
/// `python train.py ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Directory that receives one subdirectory per run.
    pub results_dir: String,
    /// Interpreter used to run the script.
    pub python: PathBuf,
    pub script: PathBuf,
    pub dir_policy: DirPolicy,
    /// Block on the training process and report its exit code.
    pub wait: bool,
    /// Resolve the command line without touching the filesystem or spawning.
    pub dry_run: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            python: PathBuf::from("python"),
            script: PathBuf::from("train.py"),
            dir_policy: DirPolicy::RequireParent,
            wait: false,
            dry_run: false,
        }
    }
}
