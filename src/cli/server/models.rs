//! Request and response models for the formula HTTP server

use crate::cli::server::error::{ServerError, ServerResult};
use crate::formula::{FormulaParams, FunctionKind};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ===== SOLVE MODELS =====

/// Raw body of `POST /api/solve`
///
/// Every field is kept untyped so that shape problems surface as the
/// matching 400 response instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    /// Function kind name
    #[serde(rename = "type")]
    pub kind: Option<JsonValue>,
    /// Named numeric parameters
    pub params: Option<JsonValue>,
    /// Optional file action: "read" or "write"
    pub action: Option<JsonValue>,
    /// File targeted by the action
    pub file_name: Option<JsonValue>,
    /// Text to write for the "write" action
    pub content: Option<JsonValue>,
}

/// Side effect requested alongside a computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    Read { file_name: String },
    Write { file_name: String, content: String },
}

impl SolveRequest {
    /// Decode a request body; anything that is not JSON is an internal error
    pub fn from_slice(body: &[u8]) -> ServerResult<Self> {
        let value: JsonValue = serde_json::from_slice(body)?;
        match value {
            JsonValue::Object(_) => Ok(serde_json::from_value(value)?),
            JsonValue::Null => Err(ServerError::Internal(anyhow::anyhow!(
                "request body is null"
            ))),
            _ => Ok(Self::default()),
        }
    }

    /// Validate `type` and `params` into a typed parameter set
    pub fn formula_params(&self) -> ServerResult<FormulaParams> {
        let (kind, params) = match (&self.kind, &self.params) {
            (Some(kind), Some(params)) if !is_empty_string(kind) => (kind, params),
            _ => return Err(ServerError::MissingFields),
        };

        let kind: FunctionKind = kind
            .as_str()
            .and_then(|name| name.parse().ok())
            .ok_or(ServerError::InvalidFunctionType)?;

        Ok(FormulaParams::from_json(kind, params)?)
    }

    /// The requested file action, if any
    ///
    /// Unknown actions are ignored. Empty or non-string `fileName`/`content`
    /// count as missing.
    pub fn file_action(&self) -> ServerResult<Option<FileAction>> {
        let file_name = non_empty_str(&self.file_name);

        match self.action.as_ref().and_then(JsonValue::as_str) {
            Some("read") => {
                let file_name = file_name.ok_or(ServerError::MissingReadFields)?;
                Ok(Some(FileAction::Read {
                    file_name: file_name.to_string(),
                }))
            }
            Some("write") => match (file_name, non_empty_str(&self.content)) {
                (Some(file_name), Some(content)) => Ok(Some(FileAction::Write {
                    file_name: file_name.to_string(),
                    content: content.to_string(),
                })),
                _ => Err(ServerError::MissingWriteFields),
            },
            _ => Ok(None),
        }
    }
}

fn is_empty_string(value: &JsonValue) -> bool {
    value.as_str().is_some_and(str::is_empty)
}

fn non_empty_str(value: &Option<JsonValue>) -> Option<&str> {
    value
        .as_ref()
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
}

/// Successful solve response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub result: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SolveResponse {
    pub fn result(result: f64) -> Self {
        Self {
            result,
            file_content: None,
            message: None,
        }
    }
}

/// Body of every 4xx/5xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
