use axum::Json;
use serde_json::{json, Value};

pub mod addresses;
pub mod contacts;
pub mod users;

/// Liveness probe; no auth, no storage.
pub async fn ping() -> Json<Value> {
    Json(json!({ "data": "pong" }))
}
