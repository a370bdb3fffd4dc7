//! Uniform response envelope returned for every tool invocation.

use serde::ser::{Serialize, Serializer};

/// Outcome of a tool call: a single text payload, flagged when it reports a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationEnvelope {
    Success(String),
    Failure(String),
}

impl OperationEnvelope {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self::Failure(text.into())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}

#[derive(serde::Serialize)]
struct WireContent<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct WireEnvelope<'a> {
    content: [WireContent<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    is_error: Option<bool>,
}

/// Serializes as `{ "content": [{ "type": "text", "text": ... }], "isError": true }`,
/// omitting `isError` on success.
impl Serialize for OperationEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireEnvelope {
            content: [WireContent {
                kind: "text",
                text: self.text(),
            }],
            is_error: self.is_error().then_some(true),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_error_flag() {
        let value = serde_json::to_value(OperationEnvelope::success("{}")).unwrap();
        assert_eq!(value, json!({ "content": [{ "type": "text", "text": "{}" }] }));
    }

    #[test]
    fn failure_envelope_sets_error_flag() {
        let envelope = OperationEnvelope::failure("boom");
        assert!(envelope.is_error());
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["isError"], json!(true));
        assert_eq!(value["content"][0]["text"], json!("boom"));
    }
}
