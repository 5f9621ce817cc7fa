use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::color::platform_colors;
pub use crate::color::{AnsiColors, ColorSink, NoColors};
pub use crate::error::LoggerError;
pub use crate::levels::{get_prefix_nc, Color, Severity};

/// Line terminator appended to every emitted line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator appended to every emitted line.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A leveled logger writing decorated lines to stdout or any [`Write`]r.
///
/// Every line has the shape `<prefix> <body> <postfix><LINE_ENDING>`. The
/// prefix is the bracketed severity tag; on the colored path it is preceded by
/// whatever the logger's [`ColorSink`] returns for WARN and ERROR, and the
/// postfix resets the color again. Messages below the threshold are dropped
/// without output.
///
/// `Logger` is cheap to clone. Clones share the threshold, so one
/// `set_threshold` call is seen by every call site holding a clone.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Shared>,
}

struct Shared {
    threshold: AtomicU8,
    colors: Box<dyn ColorSink>,
}

impl Logger {
    /// Constructs a logger with the color sink for the current platform and
    /// a threshold of [`Severity::Trace`], so nothing is filtered.
    pub fn new() -> Self {
        Self::from_sink(platform_colors())
    }

    /// Constructs a logger that colors through `colors`.
    ///
    /// # Arguments
    ///
    /// * `colors` - The sink asked to switch colors on the colored path.
    pub fn with_colors<C: ColorSink>(colors: C) -> Self {
        Self::from_sink(Box::new(colors))
    }

    fn from_sink(colors: Box<dyn ColorSink>) -> Self {
        Self {
            inner: Arc::new(Shared {
                threshold: AtomicU8::new(Severity::Trace as u8),
                colors,
            }),
        }
    }

    /// The lowest severity that currently produces output.
    pub fn threshold(&self) -> Severity {
        Severity::try_from(self.inner.threshold.load(Ordering::Relaxed))
            .unwrap_or(Severity::Trace)
    }

    /// Overwrites the threshold for this logger and all of its clones.
    pub fn set_threshold(&self, level: Severity) {
        self.inner.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Returns `true` if a message at `level` would be written.
    ///
    /// This is a pure query, use [`Logger::begin_line`] to also start a line.
    #[inline]
    pub fn is_enabled(&self, level: Severity) -> bool {
        level as u8 >= self.inner.threshold.load(Ordering::Relaxed)
    }

    /// Returns the colored prefix for `level`.
    ///
    /// For WARN and ERROR this asks the color sink to switch colors, which on
    /// a native console changes the console state immediately. Unknown raw
    /// ordinals yield the empty string.
    pub fn get_prefix<L: TryInto<Severity>>(&self, level: L) -> Cow<'static, str> {
        let severity = match level.try_into() {
            Ok(severity) => severity,
            Err(_) => return Cow::Borrowed(""),
        };
        match severity.color() {
            Some(color) => match self.inner.colors.set_foreground(color) {
                "" => Cow::Borrowed(severity.tag()),
                escape => Cow::Owned(format!("{}{}", escape, severity.tag())),
            },
            None => Cow::Borrowed(severity.tag()),
        }
    }

    /// Returns the uncolored prefix for `level`, see [`get_prefix_nc`].
    pub fn get_prefix_nc<L: TryInto<Severity>>(&self, level: L) -> &'static str {
        get_prefix_nc(level)
    }

    /// Returns the color reset for WARN and ERROR, empty otherwise.
    pub fn get_postfix<L: TryInto<Severity>>(&self, level: L) -> &'static str {
        match level.try_into() {
            Ok(severity) if severity.color().is_some() => self.inner.colors.reset(),
            _ => "",
        }
    }

    /// Starts a colored line on `out` if `level` passes the threshold.
    ///
    /// Writes only the prefix; the caller finishes the line. Returns whether
    /// anything was written.
    pub fn begin_line<W: Write>(&self, out: &mut W, level: Severity) -> io::Result<bool> {
        if !self.is_enabled(level) {
            return Ok(false);
        }
        out.write_all(self.get_prefix(level).as_bytes())?;
        Ok(true)
    }

    /// Writes `text` as one uncolored line to `out`.
    ///
    /// # Arguments
    ///
    /// * `out` - The destination, typically a file the caller opened.
    /// * `text` - The message body, written verbatim.
    /// * `level` - Severity of the message.
    ///
    /// # Returns
    ///
    /// The result of writing to `out`. A message below the threshold is not
    /// an error and returns `Ok(())` without writing.
    pub fn log_line<W: Write>(&self, out: &mut W, text: &str, level: Severity) -> io::Result<()> {
        self.log_formatted(out, format_args!("{}", text), level)
    }

    /// Writes `text` as one uncolored line to stdout.
    pub fn log_out(&self, text: &str, level: Severity) -> io::Result<()> {
        self.log_line(&mut io::stdout().lock(), text, level)
    }

    /// Formats `args` and writes it as one uncolored line to `out`.
    ///
    /// Prefer the [`log_to!`](crate::log_to) macro over calling this directly.
    pub fn log_formatted<W: Write>(
        &self, out: &mut W, args: fmt::Arguments<'_>, level: Severity
    ) -> io::Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let line = Line {
            color: "",
            tag: level.tag(),
            body: args,
            tail: LINE_ENDING,
        };
        match render(&line) {
            Some(buf) => out.write_all(buf.as_bytes()),
            None => Ok(()),
        }
    }

    /// Formats `args` and writes it as one colored line to `out`.
    ///
    /// The postfix is requested only after the body has been flushed, so a
    /// sink that resets the console out-of-band does not recolor the text
    /// before it is shown.
    pub fn log_formatted_colored<W: Write>(
        &self, out: &mut W, args: fmt::Arguments<'_>, level: Severity
    ) -> io::Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let color = match level.color() {
            Some(color) => self.inner.colors.set_foreground(color),
            None => "",
        };
        let line = Line {
            color,
            tag: level.tag(),
            body: args,
            tail: "",
        };
        let buf = match render(&line) {
            Some(buf) => buf,
            None => {
                self.get_postfix(level);
                return Ok(());
            }
        };
        let written = out.write_all(buf.as_bytes()).and_then(|()| match level.color() {
            Some(_) => out.flush(),
            None => Ok(()),
        });
        // The reset must run even when the body never reached `out`.
        let postfix = self.get_postfix(level);
        written?;
        out.write_all(postfix.as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())
    }

    /// Formats `args` and writes it as one colored line to stdout.
    ///
    /// Prefer the [`log_out!`](crate::log_out) macro over calling this directly.
    pub fn log_formatted_out(&self, args: fmt::Arguments<'_>, level: Severity) -> io::Result<()> {
        self.log_formatted_colored(&mut io::stdout().lock(), args, level)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}

struct Line<'a> {
    color: &'static str,
    tag: &'static str,
    body: fmt::Arguments<'a>,
    tail: &'static str,
}

impl Display for Line<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {} {}", self.color, self.tag, self.body, self.tail)
    }
}

/// Counts the bytes a formatting pass would produce.
struct Measure(usize);

impl fmt::Write for Measure {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Renders `line` into a buffer of exactly the right size.
///
/// Returns `None` if the buffer cannot be allocated or a formatting impl
/// fails; the line is then dropped.
fn render(line: &Line<'_>) -> Option<String> {
    let mut measure = Measure(0);
    fmt::write(&mut measure, format_args!("{}", line)).ok()?;

    let mut buf = String::new();
    buf.try_reserve_exact(measure.0).ok()?;
    fmt::write(&mut buf, format_args!("{}", line)).ok()?;
    Some(buf)
}
