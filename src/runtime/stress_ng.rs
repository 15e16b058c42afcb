use std::process::Stdio;
use sysinfo::{get_current_pid, Process, ProcessesToUpdate, System};
use tokio::process::Command;
use crate::models::stress_spec::StressSpec;
use crate::runtime::generator::{LoadGenerator, SpawnedWorker, WorkerExit};
use crate::runtime::SupervisorError;

pub(crate) struct StressNg {
    binary: String,
    signature: String,
}

impl StressNg {
    pub(crate) fn new(binary: String, signature: String) -> Self {
        StressNg { binary, signature }
    }
}

impl LoadGenerator for StressNg {
    fn spawn(&self, spec: &StressSpec) -> Result<SpawnedWorker, SupervisorError> {
        let args = spec.to_args();
        debug!("{} {}", self.binary, args.join(" "));

        let child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SupervisorError::SpawnFailed(format!("{}: {}", self.binary, e)))?;

        let pid = child.id();
        let exit = Box::pin(async move {
            match child.wait_with_output().await {
                Ok(output) if output.status.success() => WorkerExit::Success,
                Ok(output) => WorkerExit::Failed(format!(
                    "{}, stderr: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                )),
                Err(e) => WorkerExit::Failed(e.to_string()),
            }
        });

        Ok(SpawnedWorker { pid, exit })
    }

    fn terminate_all(&self) -> usize {
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::All, true);
        let own_pid = get_current_pid().ok();

        let mut signalled = 0;
        for (pid, process) in sys.processes() {
            if Some(*pid) == own_pid || !is_worker(process, &self.signature) {
                continue;
            }

            match send_terminate(process) {
                Ok(_) => {
                    debug!("SIGTERM sent to {} ({})", pid, process.name().to_string_lossy());
                    signalled += 1;
                }
                Err(e) => warn!("Error stopping {} process: {}", self.signature, e),
            }
        }

        signalled
    }
}

fn is_worker(process: &Process, signature: &str) -> bool {
    process.name().to_string_lossy().starts_with(signature)
}

#[cfg(unix)]
fn send_terminate(process: &Process) -> Result<(), SupervisorError> {
    use nix::sys::signal::{self, Signal};
    use nix::unistd::Pid;

    let pid = process.pid().as_u32();
    signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM)
        .map_err(|e| SupervisorError::SignalFailed(pid, e.to_string()))
}

#[cfg(not(unix))]
fn send_terminate(process: &Process) -> Result<(), SupervisorError> {
    if process.kill() {
        Ok(())
    } else {
        Err(SupervisorError::SignalFailed(process.pid().as_u32(), "kill refused".to_string()))
    }
}
