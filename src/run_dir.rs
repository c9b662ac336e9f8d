use crate::error::{LaunchError, Result};
use chrono::NaiveDateTime;
use std::fmt;
use std::fs;
use std::path::Path;

/// Base directory that holds one subdirectory per run.
pub const DEFAULT_RESULTS_DIR: &str = "experiments/results";

/// Minute-granularity run stamp, e.g. `2024-03-07_09-05`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// How the parent of a run directory is treated when it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirPolicy {
    /// The parent must already exist.
    #[default]
    RequireParent,
    /// Missing ancestors are created first. The run directory itself must
    /// still be new.
    CreateParents,
}

/// Path of a single run's output directory, always ending in `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunDir {
    path: String,
}

impl RunDir {
    /// Run directory for `now` under [`DEFAULT_RESULTS_DIR`].
    pub fn under_default_base(now: NaiveDateTime) -> Self {
        timestamped_path(DEFAULT_RESULTS_DIR, now)
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl fmt::Display for RunDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<Path> for RunDir {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// Joins `base` and the minute stamp of `now`, with a trailing separator.
pub fn timestamped_path(base: &str, now: NaiveDateTime) -> RunDir {
    let stamp = now.format(TIMESTAMP_FORMAT);
    let path = if base.is_empty() {
        format!("{}/", stamp)
    } else {
        format!("{}/{}/", base.trim_end_matches('/'), stamp)
    };
    RunDir { path }
}

/// Creates `dir`. Fails if it already exists, so two runs stamped with the
/// same minute never share a directory.
pub fn create_run_dir(dir: &RunDir, policy: DirPolicy) -> Result<()> {
    let to_error = |source| LaunchError::DirectoryCreation {
        path: dir.as_str().to_string(),
        source,
    };

    if policy == DirPolicy::CreateParents {
        if let Some(parent) = dir.as_path().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(to_error)?;
            }
        }
    }

    fs::create_dir(dir.as_path()).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_known_timestamp() {
        let dir = RunDir::under_default_base(at(2024, 3, 7, 9, 5, 0));
        assert_eq!(dir.as_str(), "experiments/results/2024-03-07_09-05/");
    }

    #[test]
    fn test_seconds_are_dropped() {
        let a = RunDir::under_default_base(at(2025, 12, 31, 23, 59, 0));
        let b = RunDir::under_default_base(at(2025, 12, 31, 23, 59, 59));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "experiments/results/2025-12-31_23-59/");
    }

    #[test]
    fn test_base_trailing_slash_is_not_doubled() {
        let t = at(2025, 1, 1, 0, 0, 0);
        assert_eq!(
            timestamped_path("runs/", t).as_str(),
            timestamped_path("runs", t).as_str()
        );
        assert_eq!(timestamped_path("", t).as_str(), "2025-01-01_00-00/");
        assert_eq!(timestamped_path("/", t).as_str(), "/2025-01-01_00-00/");
    }

    #[test]
    fn test_create_requires_parent_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("missing");
        let dir = timestamped_path(base.to_str().unwrap(), at(2025, 1, 1, 0, 0, 0));

        let err = create_run_dir(&dir, DirPolicy::default()).unwrap_err();
        match err {
            LaunchError::DirectoryCreation { path, source } => {
                assert_eq!(path, dir.as_str());
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!base.exists());
    }

    #[test]
    fn test_create_parents_builds_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("experiments").join("results");
        let dir = timestamped_path(base.to_str().unwrap(), at(2025, 1, 1, 0, 0, 0));

        create_run_dir(&dir, DirPolicy::CreateParents).unwrap();
        assert!(dir.as_path().is_dir());
        assert!(base.join("2025-01-01_00-00").is_dir());
    }

    #[test]
    fn test_collision_fails_under_both_policies() {
        let temp_dir = TempDir::new().unwrap();
        let dir = timestamped_path(temp_dir.path().to_str().unwrap(), at(2025, 1, 1, 0, 0, 0));

        create_run_dir(&dir, DirPolicy::RequireParent).unwrap();
        for policy in [DirPolicy::RequireParent, DirPolicy::CreateParents] {
            let err = create_run_dir(&dir, policy).unwrap_err();
            match err {
                LaunchError::DirectoryCreation { source, .. } => {
                    assert_eq!(source.kind(), ErrorKind::AlreadyExists)
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
