pub(crate) const MAX_CPU_LOAD: u32 = 100;

/// Load requested on one node. Parsed once per request, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct StressSpec {
    pub(crate) cpu: u32,
    pub(crate) ram: u64,
    pub(crate) storage: u64,
}

impl StressSpec {
    pub(crate) fn new(cpu: u64, ram: u64, storage: u64) -> Self {
        if cpu > u64::from(MAX_CPU_LOAD) {
            debug!("cpu load {} clamped to {}", cpu, MAX_CPU_LOAD);
        }

        StressSpec {
            cpu: cpu.min(u64::from(MAX_CPU_LOAD)) as u32,
            ram,
            storage,
        }
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.cpu == 0 && self.ram == 0 && self.storage == 0
    }

    /// Command line arguments understood by the load generation binary.
    pub(crate) fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--cpu".to_string(),
            "0".to_string(),
            "--cpu-load".to_string(),
            self.cpu.to_string(),
        ];

        if self.ram > 0 {
            args.push("--vm".to_string());
            args.push(self.ram.to_string());
            args.push("--vm-bytes".to_string());
            args.push(format!("{}M", self.ram));
        }

        if self.storage > 0 {
            args.push("--hdd".to_string());
            args.push(self.storage.to_string());
            args.push("--hdd-bytes".to_string());
            args.push(format!("{}M", self.storage));
        }

        args
    }
}
