use futures::future::BoxFuture;
use crate::models::stress_spec::StressSpec;
use crate::runtime::SupervisorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WorkerExit {
    Success,
    Failed(String),
}

pub(crate) struct SpawnedWorker {
    pub(crate) pid: Option<u32>,
    /// Resolves once the worker process is gone.
    pub(crate) exit: BoxFuture<'static, WorkerExit>,
}

/// The external load generation program.
pub(crate) trait LoadGenerator {
    fn spawn(&self, spec: &StressSpec) -> Result<SpawnedWorker, SupervisorError>;

    /// Signals every recognizable worker on the host, tracked or not.
    /// Returns how many were signalled.
    fn terminate_all(&self) -> usize;
}
