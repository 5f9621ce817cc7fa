//! Runs itself as a child process and checks what the stdout variants wrote.

use std::process::Command;

use leveled_logging::color::AnsiColors;
use leveled_logging::{log_out, Logger, Severity, LINE_ENDING};

const CHILD_ENV: &str = "LEVELED_LOGGING_STDOUT_CHILD";

fn emit() {
    let logger = Logger::with_colors(AnsiColors);
    logger.set_threshold(Severity::Info);

    logger.log_out("boot complete", Severity::Info).unwrap();
    logger.log_out("dropped", Severity::Debug).unwrap();
    logger.log_out("disk low", Severity::Warn).unwrap();
    log_out!(logger, Severity::Error, "{} of {} failed", 1, 3).unwrap();
    log_out!(logger, Severity::Trace, "dropped {}", 2).unwrap();
}

fn main() {
    if std::env::var_os(CHILD_ENV).is_some() {
        emit();
        return;
    }

    let output = Command::new(std::env::current_exe().unwrap())
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let expected = format!(
        "[INFO] boot complete {le}[WARN] disk low {le}\x1b[91m[ERROR] 1 of 3 failed \x1b[39m{le}",
        le = LINE_ENDING
    );
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
    println!("stdout_lines: ok");
}
