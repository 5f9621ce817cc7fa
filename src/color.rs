//! Terminal color capability.
//!
//! The formatter never branches on the platform. It asks a [`ColorSink`] to
//! switch the foreground color and splices whatever string the sink returns
//! into the line. ANSI terminals get escape sequences in-band; the Windows
//! console is driven out-of-band through `SetConsoleTextAttribute`.

use crate::levels::Color;

const ANSI_YELLOW: &str = "\x1b[93m";
const ANSI_RED: &str = "\x1b[91m";
pub(crate) const ANSI_RESET: &str = "\x1b[39m";

/// Sets and resets the foreground color of the terminal behind stdout.
///
/// Both methods return the text that must be written in-band at that point of
/// the line. A sink that changes the color through a side channel returns an
/// empty string from `set_foreground`.
pub trait ColorSink: Send + Sync + 'static {
    fn set_foreground(&self, color: Color) -> &'static str;
    fn reset(&self) -> &'static str;
}

/// Raw ANSI escape sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiColors;

impl ColorSink for AnsiColors {
    fn set_foreground(&self, color: Color) -> &'static str {
        match color {
            Color::Yellow => ANSI_YELLOW,
            Color::Red => ANSI_RED,
        }
    }

    fn reset(&self) -> &'static str {
        ANSI_RESET
    }
}

/// Never colors anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoColors;

impl ColorSink for NoColors {
    fn set_foreground(&self, _color: Color) -> &'static str {
        ""
    }

    fn reset(&self) -> &'static str {
        ""
    }
}

/// Native Windows console colors.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleColors;

#[cfg(windows)]
impl ConsoleColors {
    fn set_attribute(attribute: u16) {
        use windows_sys::Win32::Foundation::INVALID_HANDLE_VALUE;
        use windows_sys::Win32::System::Console::{
            GetStdHandle, SetConsoleTextAttribute, STD_OUTPUT_HANDLE,
        };

        // SAFETY: both calls only take plain values; a missing or redirected
        // console makes them fail, which we ignore.
        unsafe {
            let handle = GetStdHandle(STD_OUTPUT_HANDLE);
            if handle == 0 || handle == INVALID_HANDLE_VALUE {
                return;
            }
            SetConsoleTextAttribute(handle, attribute);
        }
    }
}

#[cfg(windows)]
impl ColorSink for ConsoleColors {
    fn set_foreground(&self, color: Color) -> &'static str {
        use windows_sys::Win32::System::Console::{FOREGROUND_GREEN, FOREGROUND_RED};

        match color {
            Color::Yellow => Self::set_attribute(FOREGROUND_RED | FOREGROUND_GREEN),
            Color::Red => Self::set_attribute(FOREGROUND_RED),
        }
        ""
    }

    fn reset(&self) -> &'static str {
        use windows_sys::Win32::System::Console::{
            FOREGROUND_BLUE, FOREGROUND_GREEN, FOREGROUND_RED,
        };

        Self::set_attribute(FOREGROUND_RED | FOREGROUND_GREEN | FOREGROUND_BLUE);
        ANSI_RESET
    }
}

/// The sink for the platform this binary was built for.
pub fn platform_colors() -> Box<dyn ColorSink> {
    #[cfg(windows)]
    {
        Box::new(ConsoleColors)
    }
    #[cfg(not(windows))]
    {
        Box::new(AnsiColors)
    }
}
