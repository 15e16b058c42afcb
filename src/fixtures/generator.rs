use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use crate::models::stress_spec::StressSpec;
use crate::runtime::generator::{LoadGenerator, SpawnedWorker, WorkerExit};
use crate::runtime::SupervisorError;

/// In-memory stand-in for the load generation binary.
#[derive(Clone, Default)]
pub(crate) struct FakeGenerator {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    workers: Vec<Worker>,
    spawned: usize,
    max_live: usize,
    fail_next: bool,
    last_spec: Option<StressSpec>,
    next_pid: u32,
}

struct Worker {
    orphan: bool,
    exit: oneshot::Sender<WorkerExit>,
}

impl Inner {
    fn push(&mut self, orphan: bool) -> (u32, oneshot::Receiver<WorkerExit>) {
        let (exit, receiver) = oneshot::channel();
        self.next_pid += 1;
        self.workers.push(Worker { orphan, exit });
        self.max_live = self.max_live.max(self.workers.len());
        (self.next_pid, receiver)
    }
}

impl FakeGenerator {
    pub(crate) fn new() -> Self {
        FakeGenerator::default()
    }

    /// A worker nobody tracks, as if left by a previous agent run.
    pub(crate) fn start_orphan(&self) {
        self.inner.lock().unwrap().push(true);
    }

    pub(crate) fn fail_next_spawn(&self) {
        self.inner.lock().unwrap().fail_next = true;
    }

    pub(crate) fn finish_all(&self) {
        let workers: Vec<Worker> = self.inner.lock().unwrap().workers.drain(..).collect();
        for worker in workers {
            let _ = worker.exit.send(WorkerExit::Success);
        }
    }

    pub(crate) fn live(&self) -> usize {
        self.inner.lock().unwrap().workers.len()
    }

    pub(crate) fn orphans_alive(&self) -> usize {
        self.inner.lock().unwrap().workers.iter().filter(|w| w.orphan).count()
    }

    pub(crate) fn max_live(&self) -> usize {
        self.inner.lock().unwrap().max_live
    }

    pub(crate) fn spawned(&self) -> usize {
        self.inner.lock().unwrap().spawned
    }

    pub(crate) fn last_spec(&self) -> Option<StressSpec> {
        self.inner.lock().unwrap().last_spec
    }
}

impl LoadGenerator for FakeGenerator {
    fn spawn(&self, spec: &StressSpec) -> Result<SpawnedWorker, SupervisorError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.fail_next {
            inner.fail_next = false;
            return Err(SupervisorError::SpawnFailed("fake: binary not found".to_string()));
        }

        let (pid, receiver) = inner.push(false);
        inner.spawned += 1;
        inner.last_spec = Some(*spec);

        Ok(SpawnedWorker {
            pid: Some(pid),
            exit: Box::pin(async move {
                receiver.await.unwrap_or_else(|_| WorkerExit::Failed("fake: dropped".to_string()))
            }),
        })
    }

    fn terminate_all(&self) -> usize {
        let workers: Vec<Worker> = self.inner.lock().unwrap().workers.drain(..).collect();
        let count = workers.len();
        for worker in workers {
            let _ = worker.exit.send(WorkerExit::Failed("terminated by SIGTERM".to_string()));
        }
        count
    }
}
