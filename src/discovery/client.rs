use crate::discovery::{Registry, RegistryError};
use crate::models::node::NodeIdentity;

/// Turns node names into reachable addresses. Only `register` is allowed to fail.
pub(crate) struct DiscoveryClient {
    registry: Box<dyn Registry + Send + Sync>,
}

impl DiscoveryClient {
    pub(crate) fn new(registry: Box<dyn Registry + Send + Sync>) -> Self {
        DiscoveryClient { registry }
    }

    pub(crate) async fn register(&self, identity: &NodeIdentity) -> Result<(), RegistryError> {
        self.registry.register(identity).await?;
        info!("Registered {} as {}:{}", identity.service_id(), identity.address, identity.port);
        Ok(())
    }

    pub(crate) async fn deregister(&self, identity: &NodeIdentity) {
        match self.registry.deregister(identity).await {
            Ok(_) => info!("Deregistered {}", identity.service_id()),
            Err(e) => warn!("Failed to deregister {}: {}", identity.service_id(), e),
        }
    }

    /// Addresses catalogued for `service_name`, possibly including this node.
    /// A registry failure yields an empty list.
    pub(crate) async fn list_addresses(&self, service_name: &str) -> Vec<String> {
        match self.registry.list(service_name).await {
            Ok(addresses) => addresses,
            Err(e) => {
                error!("Failed to get instances of {}: {}", service_name, e);
                vec![]
            }
        }
    }
}
