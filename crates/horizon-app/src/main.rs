//! The `horizon` binary: renders nothing, drives the black-hole scene headless.

use clap::Parser;
use horizon_app::platform::PlatformDirs;
use horizon_app::{AppError, run_headless, run_realtime};
use horizon_config::{CliArgs, Config};
use tracing::info;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("horizon: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(dir) => {
            let dirs = PlatformDirs::with_config_dir(dir.clone());
            dirs.create_all()?;
            dirs
        }
        None => PlatformDirs::resolve_and_create()?,
    };

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);
    horizon_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!(config_dir = %dirs.config_dir.display(), "configuration loaded");

    let summary = if args.realtime {
        run_realtime(&config, args.frames)?
    } else {
        run_headless(&config, args.frames)?
    };
    println!("{summary}");
    Ok(())
}
