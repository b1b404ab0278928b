//! TestConsole for capturing output in tests
//!
//! A [`ConsoleSink`] that records every write for assertion instead of
//! printing it.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use strip_ansi_escapes::strip;

use crate::console::{ConsoleSink, format_line};

/// One recorded sink write
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedWrite {
    /// Prefix exactly as received (escapes and `%c` tokens intact)
    pub prefix: String,
    /// Style arguments as received
    pub style_args: Vec<String>,
    /// Message values as received
    pub messages: Vec<Value>,
}

impl CapturedWrite {
    /// The formatted line, escapes preserved
    #[must_use]
    pub fn raw_line(&self) -> String {
        format_line(&self.prefix, &self.style_args, &self.messages)
    }

    /// The formatted line with ANSI codes stripped
    #[must_use]
    pub fn line(&self) -> String {
        String::from_utf8_lossy(&strip(self.raw_line())).into_owned()
    }
}

#[derive(Debug, Default)]
struct TestBuffer {
    writes: Vec<CapturedWrite>,
    fail_with: Option<io::ErrorKind>,
}

/// A sink that captures output for testing.
///
/// Clones share the same buffer, so one clone can be handed to a logger
/// while another is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct TestConsole {
    buffer: Arc<Mutex<TestBuffer>>,
}

impl TestConsole {
    /// Create a new test console
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, TestBuffer> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every following write fail with `kind` (None to recover)
    pub fn fail_with(&self, kind: Option<io::ErrorKind>) {
        self.buffer().fail_with = kind;
    }

    /// All captured writes
    #[must_use]
    pub fn writes(&self) -> Vec<CapturedWrite> {
        self.buffer().writes.clone()
    }

    /// Number of captured writes
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.buffer().writes.len()
    }

    /// All captured lines (ANSI codes stripped)
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.buffer().writes.iter().map(CapturedWrite::line).collect()
    }

    /// All captured lines (with ANSI codes)
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        self.buffer()
            .writes
            .iter()
            .map(CapturedWrite::raw_line)
            .collect()
    }

    /// Get output as a single string
    #[must_use]
    pub fn output_string(&self) -> String {
        self.output().join("\n")
    }

    /// Check if output contains a string (case-insensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let output = self.output_string().to_lowercase();
        output.contains(&needle.to_lowercase())
    }

    /// Check if output contains all of the given strings
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert output has specific number of lines
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.write_count();
        assert_eq!(
            actual,
            expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected,
            actual,
            self.output_string()
        );
    }

    /// Clear the buffer
    pub fn clear(&self) {
        self.buffer().writes.clear();
    }
}

impl ConsoleSink for TestConsole {
    fn write(&self, prefix: &str, style_args: &[String], messages: &[Value]) -> io::Result<()> {
        let mut buffer = self.buffer();
        if let Some(kind) = buffer.fail_with {
            return Err(io::Error::new(kind, "test console configured to fail"));
        }
        buffer.writes.push(CapturedWrite {
            prefix: prefix.to_string(),
            style_args: style_args.to_vec(),
            messages: messages.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_capture() {
        let tc = TestConsole::new();
        tc.write("[c]", &[], &[json!("Hello, world!")]).unwrap();
        assert!(tc.contains("hello"));
        assert_eq!(tc.output(), vec!["[c] Hello, world!"]);
    }

    #[test]
    fn test_ansi_stripped_in_output() {
        let tc = TestConsole::new();
        tc.write("\x1b[1m[c]\x1b[0m", &[], &[json!("x")]).unwrap();
        assert_eq!(tc.output(), vec!["[c] x"]);
        assert!(tc.raw_output()[0].contains("\x1b[1m"));
    }

    #[test]
    fn test_writes_keep_arguments() {
        let tc = TestConsole::new();
        let styles = vec!["color: red".to_string()];
        tc.write("%c[c]", &styles, &[json!({"a": 1})]).unwrap();

        let writes = tc.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].prefix, "%c[c]");
        assert_eq!(writes[0].style_args, styles);
        assert_eq!(writes[0].messages, vec![json!({"a": 1})]);
        assert_eq!(writes[0].line(), r#"[c] {"a":1}"#);
    }

    #[test]
    fn test_contains_all_and_matches() {
        let tc = TestConsole::new();
        tc.write("[auth]", &[], &[json!("code 42")]).unwrap();
        assert!(tc.contains_all(&["auth", "code"]));
        assert!(tc.matches(r"code \d+"));
        assert!(!tc.matches(r"code [a-z]+"));
        tc.assert_not_contains("error");
    }

    #[test]
    fn test_clear_and_count() {
        let tc = TestConsole::new();
        tc.write("[a]", &[], &[]).unwrap();
        tc.write("[b]", &[], &[]).unwrap();
        tc.assert_line_count(2);
        tc.clear();
        tc.assert_line_count(0);
    }

    #[test]
    fn test_clone_shares_buffer() {
        let tc = TestConsole::new();
        let other = tc.clone();
        other.write("[a]", &[], &[json!("shared")]).unwrap();
        tc.assert_contains("shared");
    }

    #[test]
    fn test_fail_with() {
        let tc = TestConsole::new();
        tc.fail_with(Some(io::ErrorKind::Other));
        assert!(tc.write("[a]", &[], &[]).is_err());
        assert_eq!(tc.write_count(), 0);
        tc.fail_with(None);
        assert!(tc.write("[a]", &[], &[]).is_ok());
    }
}
