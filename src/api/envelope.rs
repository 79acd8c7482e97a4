//! Bridge reply envelopes and their normalization.
//!
//! Bridges report failures in two different places, `result.error` and
//! `error.message`, and some replies are not JSON objects at all. Every reply
//! is classified once into an [`Envelope`]; [`Envelope::normalize`] turns that
//! into the single success/failure value callers see.

use serde_json::Value;

use crate::error::{BridgeError, Result};

/// Message used when the reply is missing or is not a JSON object.
pub const MALFORMED_RESPONSE: &str = "Bridge response error, please check the docs";

/// A classified bridge reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Empty body, invalid JSON, or a JSON value that is not an object.
    Malformed(Option<Value>),
    /// `{"result": {"error": "<message>", ...}}`
    ResultError { message: String, raw: Value },
    /// `{"error": {"message": "<message>", ...}}`
    ErrorMessage { message: String, raw: Value },
    /// An object carrying neither error field.
    Success(Value),
}

impl Envelope {
    /// Classify a raw response body.
    pub fn from_bytes(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(value),
            Err(_) => Envelope::Malformed(None),
        }
    }

    /// Classify a parsed reply. `result.error` wins over `error.message`.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Envelope::Malformed(Some(value));
        }
        if let Some(message) = non_empty_str(value.pointer("/result/error")) {
            return Envelope::ResultError { message, raw: value };
        }
        if let Some(message) = non_empty_str(value.pointer("/error/message")) {
            return Envelope::ErrorMessage { message, raw: value };
        }
        Envelope::Success(value)
    }

    /// The error message this envelope carries on its own, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Envelope::Malformed(_) => Some(MALFORMED_RESPONSE),
            Envelope::ResultError { message, .. } | Envelope::ErrorMessage { message, .. } => {
                Some(message)
            }
            Envelope::Success(_) => None,
        }
    }

    pub fn into_raw(self) -> Option<Value> {
        match self {
            Envelope::Malformed(raw) => raw,
            Envelope::ResultError { raw, .. }
            | Envelope::ErrorMessage { raw, .. }
            | Envelope::Success(raw) => Some(raw),
        }
    }

    /// Reduce to an outcome.
    ///
    /// An embedded error always wins. A clean envelope fails only when a
    /// `default_error` is supplied, which is the case on transport failure.
    pub fn normalize(self, default_error: Option<&str>) -> Result<Value> {
        match (self, default_error) {
            (Envelope::Success(value), None) => Ok(value),
            (envelope, default_error) => {
                Err(envelope.into_rejection(default_error.unwrap_or_default()))
            }
        }
    }

    /// Turn this envelope into a rejection. `default_error` is used when it
    /// carries no message of its own.
    pub fn into_rejection(self, default_error: &str) -> BridgeError {
        let message = self.message().unwrap_or(default_error).to_string();
        BridgeError::Rejected {
            message,
            envelope: self.into_raw(),
        }
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
