//! Request body and response payload value types.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Body accepted by `create` and `update`: either a JSON value that is
/// serialized to text before sending, or pre-serialized text written to the
/// wire verbatim (never double-encoded).
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Text(String),
}

impl RequestBody {
    /// Serialize the body to the text that goes on the wire.
    pub fn into_text(self) -> Result<String, ClientError> {
        match self {
            RequestBody::Json(value) => {
                serde_json::to_string(&value).map_err(ClientError::Encode)
            }
            RequestBody::Text(text) => Ok(text),
        }
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

/// Result of the processing pipeline: the decoded JSON value when decoding
/// is enabled, otherwise the raw response body text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Raw(String),
}

impl Payload {
    /// The decoded JSON value, if decoding was enabled.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    /// The verbatim body text, if decoding was disabled.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Raw(text) => Some(text),
        }
    }

    /// Deserialize the payload into a typed value. Works in both modes: a
    /// decoded `Value` is converted directly, raw text is parsed first.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        match self {
            Payload::Json(value) => serde_json::from_value(value).map_err(ClientError::Decode),
            Payload::Raw(text) => serde_json::from_str(&text).map_err(ClientError::Decode),
        }
    }
}
