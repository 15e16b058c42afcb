use std::fmt;

#[derive(Debug)]
pub enum SupervisorError {
    SpawnFailed(String),
    SignalFailed(u32, String),
}

impl fmt::Display for SupervisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupervisorError::SpawnFailed(msg) => write!(f, "Load generator failed to start: {}", msg),
            SupervisorError::SignalFailed(pid, msg) => write!(f, "Unable to signal process {}: {}", pid, msg),
        }
    }
}

impl std::error::Error for SupervisorError {}
