use std::fmt;

#[derive(Debug)]
pub(crate) enum SamplerError {
    Cpu(String),
    Memory(String),
    Storage(String),
    Other(String),
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplerError::Cpu(msg) => write!(f, "CPU sampling failed: {}", msg),
            SamplerError::Memory(msg) => write!(f, "Memory sampling failed: {}", msg),
            SamplerError::Storage(msg) => write!(f, "Storage sampling failed: {}", msg),
            SamplerError::Other(msg) => write!(f, "Sampler error: {}", msg),
        }
    }
}

impl std::error::Error for SamplerError {}
