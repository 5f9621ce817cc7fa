use std::fmt::Formatter;

pub enum LoggerError {
    UnknownSeverity(u8),
    UnknownSeverityName(String),
    Io(std::io::Error),

    #[cfg(feature = "singleton")]
    AlreadyInitialized,

    #[cfg(feature = "log")]
    SetLogger(log::SetLoggerError),
}

fn format_logger_error(l: &LoggerError, fmt: &mut Formatter) -> std::fmt::Result {
    match l {
        LoggerError::UnknownSeverity(value) => {
            write!(fmt, "Unknown Severity: {}", value)
        }
        LoggerError::UnknownSeverityName(name) => {
            write!(fmt, "Unknown Severity Name: {:?}", name)
        }
        LoggerError::Io(e) => {
            write!(fmt, "Io: {}", e)
        }
        #[cfg(feature = "singleton")]
        LoggerError::AlreadyInitialized => {
            write!(fmt, "Global Logger Already Initialized")
        }
        #[cfg(feature = "log")]
        LoggerError::SetLogger(e) => {
            write!(fmt, "SetLoggerError: {}", e)
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::Io(e)
    }
}

#[cfg(feature = "log")]
impl From<log::SetLoggerError> for LoggerError {
    fn from(e: log::SetLoggerError) -> Self {
        LoggerError::SetLogger(e)
    }
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::fmt::Debug for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Io(e) => Some(e),
            #[cfg(feature = "log")]
            LoggerError::SetLogger(e) => Some(e),
            _ => None,
        }
    }
}
