use std::fmt::Formatter;
use std::str::FromStr;

use crate::error::LoggerError;

/// Severity of a log message, ordered from least to most urgent.
///
/// Comparison is by ordinal, so `Severity::Warn >= Severity::Info` holds and a
/// logger's threshold is just the lowest severity it lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    #[default]
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

/// Foreground colors used to highlight urgent severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Yellow,
    Red,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Bare upper-case name, e.g. `"WARN"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Bracketed tag written at the start of every line, e.g. `"[WARN]"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Trace => "[TRACE]",
            Severity::Debug => "[DEBUG]",
            Severity::Info => "[INFO]",
            Severity::Warn => "[WARN]",
            Severity::Error => "[ERROR]",
        }
    }

    /// Highlight color, only WARN and ERROR have one.
    pub fn color(&self) -> Option<Color> {
        match self {
            Severity::Warn => Some(Color::Yellow),
            Severity::Error => Some(Color::Red),
            _ => None,
        }
    }
}

/// Returns the bracketed tag for `level` without any color decoration.
///
/// Used for every non-terminal destination, files must never receive escape
/// codes. Accepts a [`Severity`] or a raw ordinal; an ordinal outside the five
/// known levels yields the empty string.
pub fn get_prefix_nc<L: TryInto<Severity>>(level: L) -> &'static str {
    match level.try_into() {
        Ok(severity) => severity.tag(),
        Err(_) => "",
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(value as usize)
            .copied()
            .ok_or(LoggerError::UnknownSeverity(value))
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" | "dbg" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(LoggerError::UnknownSeverityName(s.to_string())),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
