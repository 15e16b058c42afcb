use axum::extract::State;
use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;

use crate::api::dto::health::Healthz;
use crate::api::server::AppState;

pub(crate) async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(Healthz {
        state: "UP".to_string(),
        stress: state.supervisor.status().await.into(),
    }))
}
