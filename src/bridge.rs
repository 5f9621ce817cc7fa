//! Routes the `log` crate's macros into a [`Logger`].

use std::io::Write;

use log::{LevelFilter, Metadata, Record};

use crate::error::LoggerError;
use crate::levels::Severity;
use crate::prelude::Logger;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Severity::Trace,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        // The facade has nowhere to report a failed stdout write.
        let _ = self.log_formatted_out(*record.args(), record.level().into());
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

impl Logger {
    /// Registers a clone of this logger as the `log` crate's global logger.
    ///
    /// The facade's max level is left fully open; filtering happens against
    /// this logger's threshold, so later `set_threshold` calls still apply.
    ///
    /// # Returns
    ///
    /// `LoggerError::SetLogger` if a `log` logger was already registered.
    pub fn install(&self) -> Result<(), LoggerError> {
        log::set_boxed_logger(Box::new(self.clone()))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}
