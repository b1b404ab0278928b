//! Console sinks
//!
//! A sink receives the rendered prefix, the chrome style arguments and the
//! caller's message values, like a multi-argument `console.log`.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::Value;

/// Destination for rendered log lines.
///
/// Errors are returned to the logging call unchanged; the logger never
/// swallows them.
pub trait ConsoleSink: Send + Sync {
    /// Write one log call
    fn write(&self, prefix: &str, style_args: &[String], messages: &[Value]) -> io::Result<()>;
}

/// Sink writing one line per call to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl ConsoleSink for StderrSink {
    fn write(&self, prefix: &str, style_args: &[String], messages: &[Value]) -> io::Result<()> {
        let line = format_line(prefix, style_args, messages);
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{line}")
    }
}

/// Sink writing one line per call to any writer.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take the writer back
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> ConsoleSink for WriterSink<W> {
    fn write(&self, prefix: &str, style_args: &[String], messages: &[Value]) -> io::Result<()> {
        let line = format_line(prefix, style_args, messages);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

/// Format one call the way a non-browser console does.
///
/// Without style arguments the prefix is printed verbatim. With style
/// arguments it is a format string: each `%c` consumes one argument and
/// prints nothing while arguments remain, and `%%` prints a single `%`.
/// Leftover style arguments and all messages follow, separated by single
/// spaces: strings verbatim, everything else as compact JSON.
#[must_use]
pub fn format_line(prefix: &str, style_args: &[String], messages: &[Value]) -> String {
    let mut line = String::with_capacity(prefix.len());
    let mut consumed = 0;

    if style_args.is_empty() {
        line.push_str(prefix);
    } else {
        let mut chars = prefix.chars().peekable();
        while let Some(c) = chars.next() {
            match (c, chars.peek().copied()) {
                ('%', Some('c')) if consumed < style_args.len() => {
                    chars.next();
                    consumed += 1;
                }
                ('%', Some('%')) => {
                    chars.next();
                    line.push('%');
                }
                _ => line.push(c),
            }
        }
    }

    for extra in &style_args[consumed..] {
        line.push(' ');
        line.push_str(extra);
    }

    for message in messages {
        line.push(' ');
        match message {
            Value::String(s) => line.push_str(s),
            other => line.push_str(&other.to_string()),
        }
    }

    line
}
