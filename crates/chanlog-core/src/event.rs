//! Structured log events and message payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::{PathPiece, Severity};

/// The values passed to one log call, in call order.
///
/// Values are opaque to the logger: they reach the sink and the listeners
/// exactly as given, including objects and numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages(pub Vec<Value>);

impl Messages {
    /// No messages
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value
    #[must_use]
    pub fn and(mut self, value: impl Into<Value>) -> Self {
        self.0.push(value.into());
        self
    }

    /// Borrow the values
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Take the values
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl From<&str> for Messages {
    fn from(message: &str) -> Self {
        Self(vec![Value::from(message)])
    }
}

impl From<String> for Messages {
    fn from(message: String) -> Self {
        Self(vec![Value::from(message)])
    }
}

impl From<Value> for Messages {
    fn from(message: Value) -> Self {
        Self(vec![message])
    }
}

impl From<Vec<Value>> for Messages {
    fn from(messages: Vec<Value>) -> Self {
        Self(messages)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Messages {
    fn from(messages: [T; N]) -> Self {
        Self(messages.into_iter().map(Into::into).collect())
    }
}

/// Structured mirror of one dispatched log call, delivered to listeners.
///
/// `path` is the accumulated sequence of pieces before rendering, including
/// the synthetic severity marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    /// Channel the call was made on
    pub channel_id: String,
    /// Method the call was made through
    pub severity: Severity,
    /// User pieces followed by the severity marker, if any
    pub path: Vec<PathPiece>,
    /// Message values in call order
    pub messages: Vec<Value>,
}

impl LogEvent {
    /// Create an event
    #[must_use]
    pub fn new(
        channel_id: impl Into<String>,
        severity: Severity,
        path: Vec<PathPiece>,
        messages: Vec<Value>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            severity,
            path,
            messages,
        }
    }

    /// Labels of every path piece, in order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.path.iter().map(PathPiece::label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages_from_str() {
        let messages = Messages::from("boom");
        assert_eq!(messages.as_slice(), &[json!("boom")]);
    }

    #[test]
    fn test_messages_from_array_keeps_order_and_types() {
        let messages = Messages::from([json!("a"), json!(1), json!({"k": true})]);
        assert_eq!(messages.into_vec(), vec![json!("a"), json!(1), json!({"k": true})]);
    }

    #[test]
    fn test_messages_and() {
        let messages = Messages::new().and("user").and(42).and(json!(null));
        assert_eq!(messages.0.len(), 3);
        assert_eq!(messages.0[1], json!(42));
    }

    #[test]
    fn test_event_labels() {
        let event = LogEvent::new(
            "auth/state",
            Severity::Error,
            vec![
                PathPiece::from("set"),
                Severity::Error.marker(false).unwrap(),
            ],
            vec![json!("x")],
        );
        assert_eq!(event.labels(), vec!["set", "ERROR"]);
    }

    #[test]
    fn test_event_serializes_camel_case() {
        let event = LogEvent::new("c", Severity::Log, vec![], vec![]);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["channelId"], json!("c"));
        assert_eq!(value["severity"], json!("log"));
    }
}
