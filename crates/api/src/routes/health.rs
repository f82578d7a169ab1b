//! `/health`: liveness plus database and schema status.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    /// `ok` when the database answers and its schema is current,
    /// `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub schema: SchemaStatus,
}

#[derive(Debug, Serialize)]
pub struct SchemaStatus {
    pub applied: Option<i64>,
    pub expected: Option<i64>,
    pub current: bool,
}

async fn schema_status(state: &AppState) -> Option<SchemaStatus> {
    let applied = match domus_db::applied_schema_version(&state.pool).await {
        Ok(applied) => applied,
        Err(err) => {
            tracing::warn!(error = %err, "Could not read applied migrations");
            return None;
        }
    };
    let expected = domus_db::latest_schema_version();
    Some(SchemaStatus {
        applied,
        expected,
        current: applied == expected,
    })
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = domus_db::health_check(&state.pool).await.is_ok();
    let schema = match schema_status(&state).await {
        Some(schema) if db_healthy => schema,
        _ => SchemaStatus {
            applied: None,
            expected: domus_db::latest_schema_version(),
            current: false,
        },
    };

    let status = if db_healthy && schema.current { "ok" } else { "degraded" };
    Json(Health {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
