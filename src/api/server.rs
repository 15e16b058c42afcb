use std::future::Future;
use std::sync::Arc;
use std::{net::SocketAddr, time::Duration};
use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower::{BoxError, ServiceBuilder};

use crate::api::action::healthz::healthz;
use crate::api::action::instances::instances;
use crate::api::action::stress::{stress, stress_instance};
use crate::api::action::usage::{usage, usage_instance};
use crate::api::forward::Forwarder;
use crate::config::config::Config;
use crate::discovery::DiscoveryClient;
use crate::runtime::Supervisor;
use crate::sampler::Sampler;

/// Everything a request handler can reach.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<Config>,
    pub(crate) supervisor: Arc<Supervisor>,
    pub(crate) sampler: Sampler,
    pub(crate) discovery: Arc<DiscoveryClient>,
    pub(crate) forwarder: Forwarder,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/instances", get(instances))
        .route("/stress", get(stress))
        .route("/stress/:instance", get(stress_instance))
        .route("/usage", get(usage))
        .route("/usage/:instance", get(usage_instance))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|error: BoxError| async move {
                    if error.is::<tower::timeout::error::Elapsed>() {
                        Ok(StatusCode::REQUEST_TIMEOUT)
                    } else {
                        Err((
                            StatusCode::INTERNAL_SERVER_ERROR,
                            format!("Unhandled internal error: {}", error),
                        ))
                    }
                }))
                .timeout(Duration::from_secs(10))
                .into_inner(),
        )
        .with_state(state)
}

pub(crate) async fn start<F>(state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.api.port));
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
