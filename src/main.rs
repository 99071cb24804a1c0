use std::path::PathBuf;
use std::process::ExitCode;

use band_lens::app::AppError;
use band_lens::blog;
use band_lens::config::{ConfigError, SceneConfig, parse_surface_size};
use band_lens::platform::snapshot::run_snapshot;
use band_lens::util::logging::MAIN;

const DEFAULT_SNAPSHOT: &str = "band-lens.png";

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Interactive,
    Snapshot(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
struct Options {
    mode: Mode,
    config: SceneConfig,
}

/// Parses `[--snapshot <path>] [--size <W>x<H>]`
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, ConfigError> {
    let mut options = Options {
        mode: Mode::Interactive,
        config: SceneConfig::default(),
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--snapshot" => {
                let path = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingArgumentValue(arg.clone()))?;
                options.mode = Mode::Snapshot(PathBuf::from(path));
            }
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingArgumentValue(arg.clone()))?;
                options.config = options.config.with_surface_size(parse_surface_size(&value)?);
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    Ok(options)
}

fn run(options: Options) -> Result<(), AppError> {
    match options.mode {
        Mode::Snapshot(path) => {
            run_snapshot(options.config, &path)?;
            Ok(())
        }
        Mode::Interactive => run_interactive(options.config),
    }
}

#[cfg(windows)]
fn run_interactive(config: SceneConfig) -> Result<(), AppError> {
    let controller = band_lens::app::SceneController::new(config)?;
    band_lens::platform::window::run(controller)?;
    Ok(())
}

#[cfg(not(windows))]
fn run_interactive(config: SceneConfig) -> Result<(), AppError> {
    blog!(
        MAIN,
        "{}; writing a snapshot to {} instead",
        band_lens::platform::PlatformError::Unsupported,
        DEFAULT_SNAPSHOT
    );
    run_snapshot(config, DEFAULT_SNAPSHOT.as_ref())?;
    Ok(())
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            blog!(MAIN, "{}", err);
            eprintln!("usage: band-lens [--snapshot <path.png>] [--size <W>x<H>]");
            return ExitCode::from(2);
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            blog!(MAIN, "{}", err);
            ExitCode::FAILURE
        }
    }
}
