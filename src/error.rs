use std::io;
use thiserror::Error;

/// Failures the launcher itself can produce.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to create run directory {path}: {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to start training process `{program}`: {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to wait on training process {pid}: {source}")]
    Wait {
        pid: u32,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Process exit code reported by the binary for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::DirectoryCreation { .. } => 1,
            LaunchError::ProcessSpawn { .. } => 127,
            LaunchError::Wait { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
