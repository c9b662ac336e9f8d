use clap::Parser;
use run_launcher::{
    DEFAULT_RESULTS_DIR, DirPolicy, Launcher, LauncherConfig, Outcome, ProcessSpawner,
    SystemClock,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Create a timestamped run directory and start training in it
/// (2000 epochs, ReLU activation).
#[derive(Parser)]
#[command(name = "run-launcher", version)]
struct LaunchArgs {
    /// Directory that receives one subdirectory per run
    #[arg(short, long, default_value = DEFAULT_RESULTS_DIR)]
    results_dir: String,

    /// Interpreter used to run the training script
    #[arg(short, long, default_value = "python")]
    python: PathBuf,

    /// Training script
    #[arg(short, long, default_value = "train.py")]
    script: PathBuf,

    /// Create the results directory if it does not exist yet
    #[arg(long)]
    create_parents: bool,

    /// Wait for training to finish and exit with its status
    #[arg(short, long)]
    wait: bool,

    /// Print the run directory and command without creating or starting anything
    #[arg(long)]
    dry_run: bool,
}

impl From<LaunchArgs> for LauncherConfig {
    fn from(args: LaunchArgs) -> Self {
        LauncherConfig {
            results_dir: args.results_dir,
            python: args.python,
            script: args.script,
            dir_policy: if args.create_parents {
                DirPolicy::CreateParents
            } else {
                DirPolicy::RequireParent
            },
            wait: args.wait,
            dry_run: args.dry_run,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = LaunchArgs::parse();
    let mut launcher = Launcher::new(args.into(), SystemClock, ProcessSpawner);

    match launcher.run() {
        Ok(outcome) => {
            if let Outcome::DryRun(command) = &outcome {
                println!("{}", command.save_dir());
                println!("{}", command.display_line());
            }
            ExitCode::from(outcome.exit_code().clamp(0, 255) as u8)
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
