// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Default)]
pub struct ChatRequest {
    pub message: Option<Value>,
}

impl ChatRequest {
    /// Parse a request body. Only a JSON object is accepted; `message`
    /// may hold any JSON value and is checked later by [`Self::message`].
    pub fn from_slice(body: &[u8]) -> Result<Self, String> {
        let value: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
        let mut fields: Map<String, Value> = match value {
            Value::Object(fields) => fields,
            other => return Err(format!("expected a JSON object, got {}", kind(&other))),
        };
        Ok(Self {
            message: fields.remove("message"),
        })
    }

    /// The user's text. A missing or null `message` reads as empty; any
    /// other non-string value is returned as the error.
    pub fn message(&self) -> Result<&str, &Value> {
        match &self.message {
            None | Some(Value::Null) => Ok(""),
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(other) => Err(other),
        }
    }
}

pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: String,
}
