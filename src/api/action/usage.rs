use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::server::AppState;

pub(crate) async fn usage(State(state): State<AppState>) -> Response {
    match state.sampler.sample().await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            error!("Error sampling current instance: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

pub(crate) async fn usage_instance(
    Path(instance): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.forwarder.get(&instance, "/usage", &[]).await {
        Ok(relayed) => relayed.into_response(),
        Err(e) => {
            error!("Error fetching usage of instance {}: {}", instance, e);
            StatusCode::OK.into_response()
        }
    }
}
