#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use run_launcher::{LauncherConfig, ProcessHandle, Spawner, TrainingCommand};
use std::io;
use tempfile::TempDir;

/// Records every command instead of starting a process.
#[derive(Default)]
pub struct RecordingSpawner {
    pub calls: Vec<TrainingCommand>,
}

impl Spawner for RecordingSpawner {
    fn spawn(&mut self, command: &TrainingCommand) -> io::Result<ProcessHandle> {
        self.calls.push(command.clone());
        Ok(ProcessHandle::detached(4242))
    }
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

/// Config whose results directory is `experiments/results` inside `root`.
pub fn config_under(root: &TempDir) -> LauncherConfig {
    LauncherConfig {
        results_dir: root
            .path()
            .join("experiments/results")
            .to_str()
            .unwrap()
            .to_string(),
        ..LauncherConfig::default()
    }
}
