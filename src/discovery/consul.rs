use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::discovery::{Registry, RegistryError};
use crate::models::node::NodeIdentity;

pub(crate) struct ConsulRegistry {
    client: Client,
    base_url: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct ServiceRegistration {
    #[serde(rename = "ID")]
    id: String,
    name: String,
    address: String,
    port: u16,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct CatalogService {
    #[serde(default)]
    address: String,
}

impl ConsulRegistry {
    pub(crate) fn new(address: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| RegistryError::Unreachable(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = if address.starts_with("http://") || address.starts_with("https://") {
            address.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", address.trim_end_matches('/'))
        };

        Ok(ConsulRegistry { client, base_url })
    }
}

async fn check_status(response: Response) -> Result<Response, RegistryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(RegistryError::Rejected(status.as_u16(), body))
}

#[async_trait]
impl Registry for ConsulRegistry {
    async fn register(&self, identity: &NodeIdentity) -> Result<(), RegistryError> {
        let registration = ServiceRegistration {
            id: identity.service_id(),
            name: identity.service_name.clone(),
            address: identity.address.clone(),
            port: identity.port,
        };

        let response = self.client
            .put(format!("{}/v1/agent/service/register", self.base_url))
            .json(&registration)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn deregister(&self, identity: &NodeIdentity) -> Result<(), RegistryError> {
        let response = self.client
            .put(format!("{}/v1/agent/service/deregister/{}", self.base_url, identity.service_id()))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    async fn list(&self, service_name: &str) -> Result<Vec<String>, RegistryError> {
        let response = self.client
            .get(format!("{}/v1/catalog/service/{}", self.base_url, service_name))
            .send()
            .await?;

        let services: Vec<CatalogService> = check_status(response).await?.json().await?;

        Ok(services.into_iter().map(|service| service.address).collect())
    }
}
