use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use ofl_ledger::{dispatch, RecordLedger};
use ofl_store::InMemoryLedgerStore;

/// Shared handler state: the record ledger plus host-assigned identity.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<RecordLedger<InMemoryLedgerStore>>,
    pub service_id: String,
}

/// Body of `POST /v1/invoke`.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub operation: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Invoke one ledger operation.
///
/// Application-level failures come back as `200` with a nonzero
/// `returnCode`; only an unrecognized operation name is a transport-level
/// `400`.
pub async fn invoke_handler(
    State(state): State<AppState>,
    Json(request): Json<InvokeRequest>,
) -> Response {
    match dispatch(state.ledger.as_ref(), &request.operation, &request.args) {
        Ok(response) => (StatusCode::OK, Json(response.to_wire())).into_response(),
        Err(err) => {
            tracing::warn!(operation = %request.operation, "rejected invoke");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "name": "ofl-server",
        "version": env!("CARGO_PKG_VERSION"),
        "serviceId": state.service_id,
    }))
}
