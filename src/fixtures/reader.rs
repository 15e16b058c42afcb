use std::sync::{Arc, Mutex};
use crate::sampler::{ResourceReader, SamplerError};

pub(crate) struct FakeReader {
    pub(crate) cpu: f64,
    pub(crate) memory: u64,
    pub(crate) storage: u64,
    pub(crate) fail_cpu: bool,
    pub(crate) fail_memory: bool,
    pub(crate) fail_disk: bool,
    seen_paths: Arc<Mutex<Vec<String>>>,
}

impl FakeReader {
    pub(crate) fn healthy(cpu: f64, memory: u64, storage: u64) -> Self {
        FakeReader {
            cpu,
            memory,
            storage,
            fail_cpu: false,
            fail_memory: false,
            fail_disk: false,
            seen_paths: Arc::new(Mutex::new(vec![])),
        }
    }

    pub(crate) fn seen_paths(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.seen_paths)
    }
}

impl ResourceReader for FakeReader {
    fn cpu_percent(&self) -> Result<f64, SamplerError> {
        if self.fail_cpu {
            return Err(SamplerError::Cpu("fake failure".to_string()));
        }
        Ok(self.cpu)
    }

    fn memory_used(&self) -> Result<u64, SamplerError> {
        if self.fail_memory {
            return Err(SamplerError::Memory("fake failure".to_string()));
        }
        Ok(self.memory)
    }

    fn disk_used(&self, path: &str) -> Result<u64, SamplerError> {
        self.seen_paths.lock().unwrap().push(path.to_string());
        if self.fail_disk {
            return Err(SamplerError::Storage("fake failure".to_string()));
        }
        Ok(self.storage)
    }
}
