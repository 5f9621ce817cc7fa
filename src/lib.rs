#![cfg_attr(docsrs, feature(doc_cfg))]

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
//! <br><br>
//!
//! ## You're probably looking for:
//! * [`Logger`](Logger)
//! * [`Severity`](Severity)
//! * [`log_out!`](log_out) and [`log_to!`](log_to)

pub mod prelude;
pub mod error;
pub mod color;
pub(crate) mod levels;
#[cfg(feature = "singleton")]
pub(crate) mod sync;
#[cfg(feature = "log")]
mod bridge;

pub use prelude::{
    get_prefix_nc, Color, ColorSink, Logger, LoggerError, Severity, LINE_ENDING
};

#[cfg(all(feature = "singleton", not(all(test, feature = "loom"))))]
pub use sync::{global, init_global};

/// Logs a formatted, colored line to stdout.
///
/// ```rust,no_run
/// use leveled_logging::{log_out, Logger, Severity};
///
/// let logger = Logger::new();
/// log_out!(logger, Severity::Debug, "The name of this program is: {}", "demo").ok();
/// ```
#[macro_export]
macro_rules! log_out {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_formatted_out(::std::format_args!($($arg)+), $level)
    };
}

/// Logs a formatted, uncolored line to a writer.
///
/// ```rust
/// use leveled_logging::{log_to, Logger, Severity};
///
/// let logger = Logger::new();
/// let mut out = Vec::new();
/// log_to!(logger, &mut out, Severity::Info, "{} + {} = {}", 2, 2, 4).unwrap();
/// assert!(out.starts_with(b"[INFO] 2 + 2 = 4 "));
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $out:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_formatted($out, ::std::format_args!($($arg)+), $level)
    };
}
