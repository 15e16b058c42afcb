pub(crate) mod error;
pub(crate) mod generator;
pub(crate) mod stress_ng;
pub(crate) mod supervisor;

pub(crate) use error::SupervisorError;
pub(crate) use stress_ng::StressNg;
pub(crate) use supervisor::{ApplyOutcome, Supervisor, SupervisorStatus};
