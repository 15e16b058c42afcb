use async_trait::async_trait;
use crate::discovery::RegistryError;
use crate::models::node::NodeIdentity;

/// External service directory mapping a service name to node addresses.
#[async_trait]
pub(crate) trait Registry {
    async fn register(&self, identity: &NodeIdentity) -> Result<(), RegistryError>;
    async fn deregister(&self, identity: &NodeIdentity) -> Result<(), RegistryError>;
    async fn list(&self, service_name: &str) -> Result<Vec<String>, RegistryError>;
}
