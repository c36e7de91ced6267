use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use domain::{
    medicines::{self, MedicineQuery},
    CompletionClient,
};
use serde_json::{json, Value};
use std::sync::Arc;
use ulid::Ulid;

#[derive(Clone)]
pub struct AppState {
    pub completion_client: Arc<dyn CompletionClient>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/medicine-info", post(medicine_info))
        .with_state(state)
}

// Health check
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "API is running" }))
}

// Medicine lookup
async fn medicine_info(
    State(state): State<AppState>,
    Json(query): Json<MedicineQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let request_id = Ulid::new();
    tracing::info!(
        "Lookup {}: {} name(s), get_all={}",
        request_id,
        query.names().len(),
        query.get_all
    );

    let result = medicines::lookup(state.completion_client.as_ref(), &query)
        .await
        .map_err(|e| internal_error(request_id, e))?;

    Ok(Json(result))
}

fn internal_error(request_id: Ulid, err: domain::Error) -> (StatusCode, Json<Value>) {
    let detail = match &err {
        domain::Error::MalformedResponse(source) => {
            tracing::error!("Lookup {}: unparseable model output: {}", request_id, source);
            err.to_string()
        }
        domain::Error::Upstream { message, .. } => {
            tracing::error!("Lookup {}: upstream failure: {}", request_id, message);
            format!("Error: {}", message)
        }
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": detail })),
    )
}
