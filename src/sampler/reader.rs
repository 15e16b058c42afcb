use std::path::Path;
use std::thread;
use sysinfo::{Disks, System, MINIMUM_CPU_UPDATE_INTERVAL};
use crate::sampler::SamplerError;

/// OS level resource readings. Calls may block.
pub(crate) trait ResourceReader {
    fn cpu_percent(&self) -> Result<f64, SamplerError>;
    fn memory_used(&self) -> Result<u64, SamplerError>;
    fn disk_used(&self, path: &str) -> Result<u64, SamplerError>;
}

pub(crate) struct SysinfoReader;

impl ResourceReader for SysinfoReader {
    fn cpu_percent(&self) -> Result<f64, SamplerError> {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_cpu_usage();

        if sys.cpus().is_empty() {
            return Err(SamplerError::Cpu("no cpu reported by the system".to_string()));
        }

        Ok(sys.global_cpu_usage() as f64)
    }

    fn memory_used(&self) -> Result<u64, SamplerError> {
        let mut sys = System::new();
        sys.refresh_memory();

        if sys.total_memory() == 0 {
            return Err(SamplerError::Memory("memory information unavailable".to_string()));
        }

        Ok(sys.used_memory())
    }

    fn disk_used(&self, path: &str) -> Result<u64, SamplerError> {
        let disks = Disks::new_with_refreshed_list();

        let disk = disks
            .list()
            .iter()
            .filter(|disk| Path::new(path).starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .ok_or_else(|| SamplerError::Storage(format!("no filesystem mounted for {}", path)))?;

        Ok(disk.total_space().saturating_sub(disk.available_space()))
    }
}
