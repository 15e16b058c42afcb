use crate::config::config::Config;

/// What this node announces to the registry. Built once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeIdentity {
    pub(crate) service_name: String,
    pub(crate) address: String,
    pub(crate) port: u16,
}

impl NodeIdentity {
    pub(crate) fn from_config(config: &Config) -> Self {
        NodeIdentity {
            service_name: config.service_name.clone(),
            address: config.host.clone(),
            port: config.api.port,
        }
    }

    pub(crate) fn service_id(&self) -> String {
        format!("{}-{}", self.service_name, self.address)
    }
}
