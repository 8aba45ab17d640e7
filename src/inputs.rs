//! Form input documents
//!
//! The browser form keeps its seven text fields in one flat object and saves
//! that object verbatim as JSON. The CLI reads and writes the same format.

use crate::formula::FunctionKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::path::Path;
use thiserror::Error;

/// Errors from loading, saving or converting form inputs
#[derive(Error, Debug)]
pub enum InputsError {
    #[error("Unknown input field: {0}")]
    UnknownField(String),

    #[error("Input field '{name}' is not a number: {value:?}")]
    NotANumber { name: String, value: String },

    #[error("Invalid inputs file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text values of every form field, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInputs {
    pub a: String,
    pub b: String,
    pub c: String,
    pub n: String,
    pub i: String,
    pub d: String,
    pub m: String,
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "a" => &self.a,
            "b" => &self.b,
            "c" => &self.c,
            "n" => &self.n,
            "i" => &self.i,
            "d" => &self.d,
            "m" => &self.m,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), InputsError> {
        let slot = match name {
            "a" => &mut self.a,
            "b" => &mut self.b,
            "c" => &mut self.c,
            "n" => &mut self.n,
            "i" => &mut self.i,
            "d" => &mut self.d,
            "m" => &mut self.m,
            other => return Err(InputsError::UnknownField(other.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_json(&self) -> Result<String, InputsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, InputsError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), InputsError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the `params` object the form posts for `kind`
    ///
    /// An empty field converts to 0, like the browser's `Number("")`.
    pub fn params_for(&self, kind: FunctionKind) -> Result<JsonValue, InputsError> {
        let mut params = JsonMap::new();
        for name in kind.fields() {
            let raw = self.get(name).unwrap_or_default();
            let value = parse_number(raw).ok_or_else(|| InputsError::NotANumber {
                name: (*name).to_string(),
                value: raw.to_string(),
            })?;
            params.insert((*name).to_string(), JsonValue::from(value));
        }
        Ok(JsonValue::Object(params))
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
