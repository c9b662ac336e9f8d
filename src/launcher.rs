use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};
use crate::run_dir::{RunDir, create_run_dir, timestamped_path};
use crate::training::{ProcessHandle, TrainingCommand};
use crate::{Clock, Spawner};
use log::{debug, info, warn};
use std::process::ExitStatus;

/// A run directory paired with the process that owns it.
#[derive(Debug)]
pub struct Launch {
    pub run_dir: RunDir,
    pub handle: ProcessHandle,
}

impl Launch {
    /// Blocks on the training process.
    pub fn wait(self) -> Result<Option<ExitStatus>> {
        let pid = self.handle.pid();
        self.handle
            .wait()
            .map_err(|source| LaunchError::Wait { pid, source })
    }
}

/// Result of [`Launcher::run`].
#[derive(Debug)]
pub enum Outcome {
    /// Nothing was created or started.
    DryRun(TrainingCommand),
    /// Training is running in the background.
    Started(Launch),
    /// Training was waited on. `status` is `None` if the spawner handed back
    /// a handle without an owned child.
    Finished {
        run_dir: RunDir,
        status: Option<ExitStatus>,
    },
}

impl Outcome {
    /// Exit code for the launcher process.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::DryRun(_) | Outcome::Started(_) => 0,
            Outcome::Finished { status: None, .. } => 0,
            Outcome::Finished {
                status: Some(status),
                ..
            } => status.code().unwrap_or(1),
        }
    }
}

/// Creates a fresh run directory and starts training in it.
pub struct Launcher<C: Clock, S: Spawner> {
    config: LauncherConfig,
    clock: C,
    spawner: S,
}

impl<C: Clock, S: Spawner> Launcher<C, S> {
    pub fn new(config: LauncherConfig, clock: C, spawner: S) -> Self {
        Self {
            config,
            clock,
            spawner,
        }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Command line for a launch at the clock's current time.
    pub fn plan(&self) -> TrainingCommand {
        let run_dir = timestamped_path(&self.config.results_dir, self.clock.now());
        TrainingCommand::new(&self.config.python, &self.config.script, run_dir)
    }

    /// Creates the run directory, then spawns training without waiting.
    ///
    /// No process is spawned if the directory cannot be created.
    pub fn launch(&mut self) -> Result<Launch> {
        let command = self.plan();
        let run_dir = command.save_dir().clone();

        create_run_dir(&run_dir, self.config.dir_policy)?;
        info!("Created run directory {}", run_dir);

        debug!("Spawning: {}", command.display_line());
        let handle = self.spawner.spawn(&command).map_err(|source| {
            warn!("Run directory {} left without a training process", run_dir);
            LaunchError::ProcessSpawn {
                program: command.program().display().to_string(),
                source,
            }
        })?;
        info!(
            "Started training (pid {}) with {} epochs, activation {}",
            handle.pid(),
            command.config().num_epochs(),
            command.config().activation()
        );

        Ok(Launch { run_dir, handle })
    }

    /// Performs a launch according to the config's `dry_run` and `wait` flags.
    pub fn run(&mut self) -> Result<Outcome> {
        if self.config.dry_run {
            let command = self.plan();
            info!("Dry run: would create {}", command.save_dir());
            info!("Dry run: would run {}", command.display_line());
            return Ok(Outcome::DryRun(command));
        }

        let launch = self.launch()?;
        if !self.config.wait {
            return Ok(Outcome::Started(launch));
        }

        let run_dir = launch.run_dir.clone();
        let status = launch.wait()?;
        if let Some(status) = status {
            info!("Training exited with {}", status);
        }
        Ok(Outcome::Finished { run_dir, status })
    }
}
