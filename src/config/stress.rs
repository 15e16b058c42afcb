use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct Stress {
    /// Load generation binary, resolved through PATH.
    pub(crate) binary: String,
    /// Process name prefix identifying load workers on the host, tracked or not.
    pub(crate) signature: String,
    /// Filesystem whose usage is reported as storage.
    pub(crate) disk_path: String,
}

impl Default for Stress {
    fn default() -> Self {
        Stress {
            binary: "stress-ng".to_string(),
            signature: "stress-ng".to_string(),
            disk_path: "/".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct Forward {
    pub(crate) timeout_secs: u64,
}

impl Default for Forward {
    fn default() -> Self {
        Forward { timeout_secs: 5 }
    }
}
