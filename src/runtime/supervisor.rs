use std::sync::Arc;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use crate::models::stress_spec::StressSpec;
use crate::runtime::generator::{LoadGenerator, WorkerExit};
use crate::runtime::SupervisorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApplyOutcome {
    Applied,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SupervisorStatus {
    Idle,
    Running {
        spec: StressSpec,
        pid: Option<u32>,
        started_at: DateTime<Utc>,
    },
}

struct LoadGeneratorHandle {
    generation: u64,
    pid: Option<u32>,
    spec: StressSpec,
    started_at: DateTime<Utc>,
}

#[derive(Default)]
struct SupervisorState {
    current: Option<LoadGeneratorHandle>,
    generation: u64,
}

/// Owns the single local load generator. `apply` calls are serialized.
pub(crate) struct Supervisor {
    generator: Arc<dyn LoadGenerator + Send + Sync>,
    state: Arc<Mutex<SupervisorState>>,
}

impl Supervisor {
    pub(crate) fn new(generator: Arc<dyn LoadGenerator + Send + Sync>) -> Self {
        Supervisor {
            generator,
            state: Arc::new(Mutex::new(SupervisorState::default())),
        }
    }

    pub(crate) async fn apply(&self, spec: StressSpec) -> Result<ApplyOutcome, SupervisorError> {
        let mut state = self.state.lock().await;

        if let Some(previous) = state.current.take() {
            info!("Stopping existing load generator (pid {:?}, {:?})", previous.pid, previous.spec);
        }

        // Workers left over by a previous agent run are not tracked by any handle.
        let signalled = self.generator.terminate_all();
        if signalled > 0 {
            info!("Sent termination signal to {} load generator process(es)", signalled);
        }

        if spec.is_idle() {
            return Ok(ApplyOutcome::Stopped);
        }

        let worker = self.generator.spawn(&spec)?;

        state.generation += 1;
        let generation = state.generation;
        state.current = Some(LoadGeneratorHandle {
            generation,
            pid: worker.pid,
            spec,
            started_at: Utc::now(),
        });
        info!("Load generator started (pid {:?}, {:?})", worker.pid, spec);

        let watched = Arc::clone(&self.state);
        let exit = worker.exit;
        tokio::spawn(async move {
            match exit.await {
                WorkerExit::Success => info!("Load generator {} finished successfully", generation),
                WorkerExit::Failed(reason) => warn!("Load generator {} finished with error: {}", generation, reason),
            }

            let mut state = watched.lock().await;
            if state.current.as_ref().map(|handle| handle.generation) == Some(generation) {
                state.current = None;
            }
        });

        Ok(ApplyOutcome::Applied)
    }

    pub(crate) async fn status(&self) -> SupervisorStatus {
        let state = self.state.lock().await;

        match &state.current {
            Some(handle) => SupervisorStatus::Running {
                spec: handle.spec,
                pid: handle.pid,
                started_at: handle.started_at,
            },
            None => SupervisorStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::generator::FakeGenerator;
    use std::time::Duration;

    fn supervisor(generator: &FakeGenerator) -> Supervisor {
        Supervisor::new(Arc::new(generator.clone()))
    }

    async fn wait_for_idle(supervisor: &Supervisor) -> bool {
        for _ in 0..50 {
            if supervisor.status().await == SupervisorStatus::Idle {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    #[tokio::test]
    async fn apply_starts_worker() {
        let generator = FakeGenerator::new();
        let supervisor = supervisor(&generator);
        let spec = StressSpec::new(50, 0, 0);

        let outcome = supervisor.apply(spec).await.unwrap();

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(generator.live(), 1);
        assert!(matches!(supervisor.status().await, SupervisorStatus::Running { spec: s, .. } if s == spec));
    }

    #[tokio::test]
    async fn apply_replaces_running_worker() {
        let generator = FakeGenerator::new();
        let supervisor = supervisor(&generator);

        supervisor.apply(StressSpec::new(50, 0, 0)).await.unwrap();
        supervisor.apply(StressSpec::new(20, 128, 0)).await.unwrap();

        assert_eq!(generator.live(), 1);
        assert_eq!(generator.spawned(), 2);
        assert!(matches!(
            supervisor.status().await,
            SupervisorStatus::Running { spec, .. } if spec == StressSpec::new(20, 128, 0)
        ));
    }

    #[tokio::test]
    async fn zero_spec_stops_worker() {
        let generator = FakeGenerator::new();
        let supervisor = supervisor(&generator);

        supervisor.apply(StressSpec::new(50, 0, 0)).await.unwrap();
        let outcome = supervisor.apply(StressSpec::new(0, 0, 0)).await.unwrap();

        assert_eq!(outcome, ApplyOutcome::Stopped);
        assert_eq!(generator.live(), 0);
        assert_eq!(supervisor.status().await, SupervisorStatus::Idle);
    }

    #[tokio::test]
    async fn stop_when_idle_is_idempotent() {
        let generator = FakeGenerator::new();
        let supervisor = supervisor(&generator);

        assert_eq!(supervisor.apply(StressSpec::default()).await.unwrap(), ApplyOutcome::Stopped);
        assert_eq!(supervisor.apply(StressSpec::default()).await.unwrap(), ApplyOutcome::Stopped);

        assert_eq!(generator.spawned(), 0);
        assert_eq!(supervisor.status().await, SupervisorStatus::Idle);
    }

    #[tokio::test]
    async fn orphan_is_terminated_before_start() {
        let generator = FakeGenerator::new();
        generator.start_orphan();
        let supervisor = supervisor(&generator);
        assert_eq!(supervisor.status().await, SupervisorStatus::Idle);
        assert_eq!(generator.live(), 1);

        supervisor.apply(StressSpec::new(10, 0, 0)).await.unwrap();

        assert_eq!(generator.live(), 1);
        assert_eq!(generator.max_live(), 1);
        assert_eq!(generator.orphans_alive(), 0);
    }

    #[tokio::test]
    async fn spawn_failure_leaves_idle() {
        let generator = FakeGenerator::new();
        let supervisor = supervisor(&generator);
        supervisor.apply(StressSpec::new(50, 0, 0)).await.unwrap();

        generator.fail_next_spawn();
        let result = supervisor.apply(StressSpec::new(60, 0, 0)).await;

        assert!(matches!(result, Err(SupervisorError::SpawnFailed(_))));
        assert_eq!(generator.live(), 0);
        assert_eq!(supervisor.status().await, SupervisorStatus::Idle);
    }

    #[tokio::test]
    async fn worker_exit_returns_to_idle() {
        let generator = FakeGenerator::new();
        let supervisor = supervisor(&generator);
        supervisor.apply(StressSpec::new(50, 0, 0)).await.unwrap();

        generator.finish_all();

        assert!(wait_for_idle(&supervisor).await);
    }

    #[tokio::test]
    async fn stale_watcher_keeps_newer_handle() {
        let generator = FakeGenerator::new();
        let supervisor = supervisor(&generator);

        supervisor.apply(StressSpec::new(50, 0, 0)).await.unwrap();
        supervisor.apply(StressSpec::new(70, 0, 0)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(matches!(
            supervisor.status().await,
            SupervisorStatus::Running { spec, .. } if spec == StressSpec::new(70, 0, 0)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_apply_never_overlaps() {
        let generator = FakeGenerator::new();
        let supervisor = Arc::new(supervisor(&generator));

        let mut tasks = vec![];
        for cpu in 1..=32u64 {
            let supervisor = Arc::clone(&supervisor);
            tasks.push(tokio::spawn(async move {
                supervisor.apply(StressSpec::new(cpu, 0, 0)).await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(generator.max_live(), 1);
        assert_eq!(generator.live(), 1);
        assert_eq!(generator.spawned(), 32);
        assert!(matches!(
            supervisor.status().await,
            SupervisorStatus::Running { spec, .. } if Some(spec) == generator.last_spec()
        ));
    }
}
