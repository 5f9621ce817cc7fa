use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use leveled_logging::{log_out, Logger, LoggerError, Severity};

/// Takes the first argument as the filename, whatever it looks like, and
/// ignores the rest.
#[derive(Parser, Debug)]
#[command(name = "logging-demo")]
#[command(about = "Writes one log line into a file", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// File to create and write the log line into
    #[arg(allow_hyphen_values = true)]
    filename: Option<PathBuf>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<OsString>,
}

fn run(logger: &Logger, filename: &Path) -> Result<(), LoggerError> {
    let mut file = File::create(filename)?;
    logger.log_line(&mut file, "Hello world from logging.h!", Severity::Info)?;
    Ok(())
}

fn main() -> ExitCode {
    let logger = Logger::new();
    logger.set_threshold(Severity::Debug);

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "logging-demo".to_string());
    let _ = log_out!(logger, Severity::Debug, "The name of this program is: {}", program);

    let filename = match Cli::try_parse() {
        Ok(Cli { filename: Some(filename), .. }) => filename,
        Ok(Cli { filename: None, .. }) | Err(_) => {
            let _ = log_out!(logger, Severity::Error, "Usage: {} [filename]", program);
            return ExitCode::FAILURE;
        }
    };

    match run(&logger, &filename) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = log_out!(logger, Severity::Error, "Couldn't open {}! {}", filename.display(), e);
            ExitCode::FAILURE
        }
    }
}
