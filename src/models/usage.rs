use serde::{Deserialize, Serialize};

/// Point in time resource usage of the local node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct UsageSnapshot {
    pub(crate) cpu: f64,
    pub(crate) memory: u64,
    pub(crate) storage: u64,
}
