use clap::{ArgMatches, Command};
use std::process;
use std::sync::Arc;
use std::time::Duration;

use crate::api::forward::Forwarder;
use crate::api::server::{self as ApiServer, AppState};
use crate::config::config::Config;
use crate::discovery::{ConsulRegistry, DiscoveryClient};
use crate::models::node::NodeIdentity;
use crate::runtime::{StressNg, Supervisor};
use crate::sampler::{Sampler, SysinfoReader};

pub(crate) fn command_config() -> Command {
    Command::new("start")
        .about("Register this node and serve the stress control plane")
}

pub(crate) async fn execute(_args: &ArgMatches, configuration: Config) {
    info!("Registering service...");

    let registry = match ConsulRegistry::new(&configuration.registry.address) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to connect to registry {}: {}", configuration.registry.address, e);
            process::exit(1);
        }
    };

    let discovery = Arc::new(DiscoveryClient::new(Box::new(registry)));
    let identity = NodeIdentity::from_config(&configuration);

    if let Err(e) = discovery.register(&identity).await {
        error!("Failed to register service: {}", e);
        process::exit(1);
    }

    let forwarder = match Forwarder::new(Duration::from_secs(configuration.forward.timeout_secs), configuration.api.port) {
        Ok(forwarder) => forwarder,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let generator = StressNg::new(configuration.stress.binary.clone(), configuration.stress.signature.clone());

    let state = AppState {
        supervisor: Arc::new(Supervisor::new(Arc::new(generator))),
        sampler: Sampler::new(Arc::new(SysinfoReader), configuration.stress.disk_path.clone()),
        discovery: Arc::clone(&discovery),
        forwarder,
        config: Arc::new(configuration),
    };

    if let Err(e) = ApiServer::start(state, shutdown_signal()).await {
        error!("Server error: {}", e);
    }

    discovery.deregister(&identity).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
}
