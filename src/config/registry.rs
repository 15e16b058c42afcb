use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct Registry {
    pub(crate) address: String,
}

impl Default for Registry {
    fn default() -> Self {
        Registry {
            address: "consul-agent:8500".to_string(),
        }
    }
}
