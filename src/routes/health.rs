use axum::{Json, extract::State};

use crate::{message::HealthResponse, state::SharedState};

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.generator_ready()))
}
