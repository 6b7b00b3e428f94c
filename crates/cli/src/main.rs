mod app;

use anyhow::Result;
use std::{
    env,
    fs::{self, File, OpenOptions},
    io,
    path::Path,
    process::ExitCode,
    sync::Mutex,
};

use marina_core::{
    config::{self, AppConfig},
    Fleet, FleetFile,
};
use tracing::warn;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

fn main() -> ExitCode {
    let path = match parse_args(env::args()) {
        Ok(path) => path,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::from(1);
        }
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Extract the data file path, or the usage message when the argument count is wrong.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<String, String> {
    let program = args.next().unwrap_or_else(|| "marina".to_string());
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(path),
        _ => Err(format!("Usage: {program} <CSV file>")),
    }
}

fn run(path: &str) -> Result<()> {
    let default_config = config::ensure_default_config();
    let (config, config_err) = AppConfig::load_or_default();
    init_logging(&config.log_dir);
    if let Err(err) = default_config {
        warn!("could not write default config: {err:#}");
    }
    if let Some(err) = config_err {
        warn!("using default configuration: {err:#}");
        eprintln!("Warning: using default configuration: {err:#}");
    }

    let store = FleetFile::new(path);
    let fleet = match store.load_fleet(config.capacity) {
        Ok(fleet) => fleet,
        Err(err) => {
            warn!("starting with an empty fleet: {err:#}");
            eprintln!("Error: Could not open file {path}: {err:#}");
            Fleet::with_capacity_limit(config.capacity)
        }
    };

    let stdin = io::stdin();
    let session = app::Session::new(fleet, store, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}

/// Log to stderr when `RUST_LOG` asks for it, and always to `marina.log`.
fn init_logging(log_dir: &Path) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_default_env());

    let file_layer = open_log_file(log_dir).ok().map(|file| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .compact()
            .with_writer(Mutex::new(file))
            .with_filter(LevelFilter::INFO)
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn open_log_file(log_dir: &Path) -> io::Result<File> {
    fs::create_dir_all(log_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("marina.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn single_argument_is_the_data_path() {
        assert_eq!(
            parse_args(args(&["marina", "fleet.csv"])),
            Ok("fleet.csv".to_string())
        );
    }

    #[test]
    fn missing_argument_yields_usage() {
        assert_eq!(
            parse_args(args(&["marina"])),
            Err("Usage: marina <CSV file>".to_string())
        );
    }

    #[test]
    fn extra_arguments_yield_usage() {
        assert_eq!(
            parse_args(args(&["./marina", "a.csv", "b.csv"])),
            Err("Usage: ./marina <CSV file>".to_string())
        );
    }

    #[test]
    fn empty_argv_uses_default_program_name() {
        assert_eq!(
            parse_args(args(&[])),
            Err("Usage: marina <CSV file>".to_string())
        );
    }
}
