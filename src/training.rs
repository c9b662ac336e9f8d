use crate::Spawner;
use crate::run_dir::RunDir;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

/// Hyperparameters handed to every training run. They are not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingConfig {
    num_epochs: u32,
    activation: &'static str,
}

impl TrainingConfig {
    pub const NUM_EPOCHS: u32 = 2000;
    pub const ACTIVATION: &'static str = "relu";

    pub const fn fixed() -> Self {
        Self {
            num_epochs: Self::NUM_EPOCHS,
            activation: Self::ACTIVATION,
        }
    }

    pub fn num_epochs(&self) -> u32 {
        self.num_epochs
    }

    pub fn activation(&self) -> &'static str {
        self.activation
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self::fixed()
    }
}

/// Full command line of one training run: `<program> <script> <args...>`.
#[derive(Debug, Clone)]
pub struct TrainingCommand {
    program: PathBuf,
    script: PathBuf,
    save_dir: RunDir,
    config: TrainingConfig,
}

impl TrainingCommand {
    pub fn new(program: impl Into<PathBuf>, script: impl Into<PathBuf>, save_dir: RunDir) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
            save_dir,
            config: TrainingConfig::fixed(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn save_dir(&self) -> &RunDir {
        &self.save_dir
    }

    pub fn config(&self) -> TrainingConfig {
        self.config
    }

    /// Options understood by the training script.
    pub fn training_args(&self) -> Vec<String> {
        vec![
            "--save_dir".to_string(),
            self.save_dir.as_str().to_string(),
            "--num_epochs".to_string(),
            self.config.num_epochs().to_string(),
            "--activation".to_string(),
            self.config.activation().to_string(),
        ]
    }

    /// Arguments passed to the program: the script followed by its options.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(7);
        argv.push(self.script.clone().into_os_string());
        argv.extend(self.training_args().into_iter().map(OsString::from));
        argv
    }

    /// Shell-like rendering for logs and dry runs. Not quoted.
    pub fn display_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in self.argv() {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

/// A started training process.
///
/// Dropping the handle neither kills nor reaps the child; it keeps running
/// after the launcher exits.
#[derive(Debug)]
pub struct ProcessHandle {
    pid: u32,
    child: Option<Child>,
}

impl ProcessHandle {
    /// Handle with a pid but no owned child, for spawners that do not use
    /// `std::process`.
    pub fn detached(pid: u32) -> Self {
        Self { pid, child: None }
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Blocks until the child exits. Returns `None` when the handle does not
    /// own a child.
    pub fn wait(self) -> io::Result<Option<ExitStatus>> {
        match self.child {
            Some(mut child) => child.wait().map(Some),
            None => Ok(None),
        }
    }
}

impl From<Child> for ProcessHandle {
    fn from(child: Child) -> Self {
        Self {
            pid: child.id(),
            child: Some(child),
        }
    }
}

/// Spawns the training command as an OS process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&mut self, command: &TrainingCommand) -> io::Result<ProcessHandle> {
        // A missing script only shows up inside an interpreter that did start.
        if !command.script().is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("training script {} not found", command.script().display()),
            ));
        }
        let child = Command::new(command.program())
            .args(command.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;
        Ok(ProcessHandle::from(child))
    }
}
