use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::stress::StressQuery;
use crate::api::server::AppState;
use crate::runtime::ApplyOutcome;

pub(crate) const APPLIED: &str = "Applied stress on current instance\n";
pub(crate) const STOPPED: &str = "No stress applied, current stress-ng process stopped\n";

/// Local stress never reports failure to the caller; errors only reach the log.
pub(crate) async fn stress(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let spec = StressQuery::from_raw(query.as_deref()).to_spec();
    debug!("Stress requested on current instance: {:?}", spec);

    match state.supervisor.apply(spec).await {
        Ok(ApplyOutcome::Applied) => (StatusCode::OK, APPLIED).into_response(),
        Ok(ApplyOutcome::Stopped) => (StatusCode::OK, STOPPED).into_response(),
        Err(e) => {
            error!("Error stressing current instance: {}", e);
            StatusCode::OK.into_response()
        }
    }
}

pub(crate) async fn stress_instance(
    Path(instance): Path<String>,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let query = StressQuery::from_raw(query.as_deref());

    match state.forwarder.get(&instance, "/stress", &query.forward_params()).await {
        Ok(relayed) => relayed.into_response(),
        Err(e) => {
            error!("Error stressing instance {}: {}", instance, e);
            StatusCode::OK.into_response()
        }
    }
}
