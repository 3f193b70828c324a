use axum::{extract::State, response::Json};
use comercio_database::postgres_health_check;
use serde_json::{json, Value};

use crate::AppState;

pub async fn detailed_health_check(State(state): State<AppState>) -> Json<Value> {
    let mut health_status = json!({
        "status": "healthy",
        "service": "comercio-catalog-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    let postgres_status = match postgres_health_check(&state.pool).await {
        Ok(_) => json!({"status": "healthy", "message": "Connected"}),
        Err(e) => json!({"status": "unhealthy", "message": e.to_string()}),
    };
    health_status["checks"]["postgres"] = postgres_status;

    if health_status["checks"]["postgres"]["status"] != "healthy" {
        health_status["status"] = json!("degraded");
    }

    Json(health_status)
}
