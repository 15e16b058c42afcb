use axum::extract::State;
use axum::response::IntoResponse;

use crate::api::server::AppState;

pub(crate) async fn instances(State(state): State<AppState>) -> impl IntoResponse {
    let instances = state.discovery.list_addresses(&state.config.service_name).await;
    debug!("{} instance(s) discovered", instances.len());

    format!("Instances: {}\n", instances.join(", "))
}
