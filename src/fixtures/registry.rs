use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use crate::discovery::{Registry, RegistryError};
use crate::models::node::NodeIdentity;

/// Registry returning a fixed catalogue, or failing every call.
pub(crate) struct FakeRegistry {
    addresses: Option<Vec<String>>,
    registered: Arc<Mutex<HashSet<String>>>,
}

impl FakeRegistry {
    pub(crate) fn with_addresses(addresses: &[&str]) -> Self {
        FakeRegistry {
            addresses: Some(addresses.iter().map(|a| a.to_string()).collect()),
            registered: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub(crate) fn failing() -> Self {
        FakeRegistry {
            addresses: None,
            registered: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub(crate) fn registered(&self) -> Arc<Mutex<HashSet<String>>> {
        Arc::clone(&self.registered)
    }

    fn unreachable() -> RegistryError {
        RegistryError::Unreachable("fake: connection refused".to_string())
    }
}

#[async_trait]
impl Registry for FakeRegistry {
    async fn register(&self, identity: &NodeIdentity) -> Result<(), RegistryError> {
        if self.addresses.is_none() {
            return Err(Self::unreachable());
        }
        self.registered.lock().unwrap().insert(identity.service_id());
        Ok(())
    }

    async fn deregister(&self, identity: &NodeIdentity) -> Result<(), RegistryError> {
        if self.addresses.is_none() {
            return Err(Self::unreachable());
        }
        self.registered.lock().unwrap().remove(&identity.service_id());
        Ok(())
    }

    async fn list(&self, _service_name: &str) -> Result<Vec<String>, RegistryError> {
        self.addresses.clone().ok_or_else(Self::unreachable)
    }
}
