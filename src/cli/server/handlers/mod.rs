pub mod files_handler;

use crate::cli::server::AppState;
use crate::cli::server::error::{ServerError, ServerResult};
use crate::cli::server::models::{FileAction, SolveRequest, SolveResponse};
use crate::formula::{Evaluation, FunctionKind};
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::Json,
};
use serde_json::Value as JsonValue;
use tracing::debug;

pub async fn health_handler() -> ServerResult<Json<JsonValue>> {
    let functions: Vec<_> = FunctionKind::all().iter().map(|k| k.as_str()).collect();

    let payload = serde_json::json!({
        "status": "ok",
        "functions": functions,
    });

    Ok(Json(payload))
}

pub async fn version_handler() -> ServerResult<Json<JsonValue>> {
    let payload = serde_json::json!({
        "service": "formula-lab",
        "version": env!("CARGO_PKG_VERSION"),
    });

    Ok(Json(payload))
}

/// `POST /api/solve`
///
/// The body is taken as raw bytes so that malformed JSON maps to the
/// generic 500 rather than axum's extractor rejection.
pub async fn solve_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Json<SolveResponse>> {
    let request = SolveRequest::from_slice(&body?)?;
    handle_solve(&state, request).await.map(Json)
}

async fn handle_solve(state: &AppState, request: SolveRequest) -> ServerResult<SolveResponse> {
    let params = request.formula_params()?;

    let result = match params.evaluate() {
        Evaluation::Valid(value) => value,
        Evaluation::Invalid => return Err(ServerError::InvalidResult),
    };
    debug!(kind = %params.kind(), result, "formula evaluated");

    let response = match request.file_action()? {
        Some(FileAction::Read { file_name }) => {
            let content = state
                .store
                .read(&file_name)
                .await
                .map_err(|e| ServerError::from_storage(e, false))?;
            SolveResponse {
                file_content: Some(content),
                ..SolveResponse::result(result)
            }
        }
        Some(FileAction::Write { file_name, content }) => {
            state
                .store
                .write(&file_name, &content)
                .await
                .map_err(|e| ServerError::from_storage(e, true))?;
            SolveResponse {
                message: Some("File written successfully".to_string()),
                ..SolveResponse::result(result)
            }
        }
        None => SolveResponse::result(result),
    };

    Ok(response)
}
