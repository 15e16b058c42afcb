use serde::Serialize;
use crate::runtime::SupervisorStatus;

#[derive(Serialize, Debug)]
pub(crate) struct Healthz {
    pub(crate) state: String,
    pub(crate) stress: StressState,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub(crate) enum StressState {
    Idle(&'static str),
    Running {
        cpu: u32,
        ram: u64,
        storage: u64,
        pid: Option<u32>,
        started_at: String,
    },
}

impl From<SupervisorStatus> for StressState {
    fn from(status: SupervisorStatus) -> Self {
        match status {
            SupervisorStatus::Idle => StressState::Idle("idle"),
            SupervisorStatus::Running { spec, pid, started_at } => StressState::Running {
                cpu: spec.cpu,
                ram: spec.ram,
                storage: spec.storage,
                pid,
                started_at: started_at.to_rfc3339(),
            },
        }
    }
}
