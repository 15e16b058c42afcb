mod error;
mod reader;

pub(crate) use error::SamplerError;
pub(crate) use reader::{ResourceReader, SysinfoReader};

use std::sync::Arc;
use crate::models::usage::UsageSnapshot;

/// Produces a fresh `UsageSnapshot` on every call, all or nothing.
#[derive(Clone)]
pub(crate) struct Sampler {
    reader: Arc<dyn ResourceReader + Send + Sync>,
    disk_path: String,
}

impl Sampler {
    pub(crate) fn new(reader: Arc<dyn ResourceReader + Send + Sync>, disk_path: String) -> Self {
        Sampler { reader, disk_path }
    }

    pub(crate) async fn sample(&self) -> Result<UsageSnapshot, SamplerError> {
        let reader = Arc::clone(&self.reader);
        let disk_path = self.disk_path.clone();

        tokio::task::spawn_blocking(move || -> Result<UsageSnapshot, SamplerError> {
            let cpu = reader.cpu_percent()?;
            let memory = reader.memory_used()?;
            let storage = reader.disk_used(&disk_path)?;

            Ok(UsageSnapshot { cpu, memory, storage })
        })
        .await
        .map_err(|e| SamplerError::Other(format!("Sampling task failed: {}", e)))?
    }
}
