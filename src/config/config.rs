use std::env;
use std::fs;
use std::path::Path;
use serde::Deserialize;
use local_ip_address::local_ip;
use crate::config;
use toml::de::Error as TomlError;

pub(crate) const SERVICE_NAME: &str = "carbonifer-stress";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) host: String,
    pub(crate) service_name: String,
    pub(crate) api: config::api::Api,
    pub(crate) registry: config::registry::Registry,
    pub(crate) stress: config::stress::Stress,
    pub(crate) forward: config::stress::Forward,
}

impl Config {
    pub(crate) fn get_api_url(&self) -> String {
        format!("{}://{}:{}", self.api.scheme, self.host, self.api.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        let host = match local_ip() {
            Ok(ip) => ip.to_string(),
            Err(err) => {
                debug!("Unable to detect local ip ({}), using loopback", err);
                "127.0.0.1".to_string()
            }
        };

        Config {
            host,
            service_name: SERVICE_NAME.to_string(),
            api: config::api::Api::default(),
            registry: config::registry::Registry::default(),
            stress: config::stress::Stress::default(),
            forward: config::stress::Forward::default(),
        }
    }
}

pub(crate) fn get_config_dir() -> String {
    match env::var("CARBONIFER_CONFIG_DIR") {
        Ok(variable) => variable,
        Err(_) => format!("{}/.config/carbonifer/stress", env::var("HOME").unwrap_or_default())
    }
}

pub(crate) fn load_config() -> Config {
    let mut config = load_config_from(&get_config_dir());

    if let Ok(agent) = env::var("CONSUL_AGENT") {
        debug!("Registry address overridden by CONSUL_AGENT: {}", agent);
        config.registry.address = agent;
    }

    config
}

pub(crate) fn load_config_from(config_dir: &str) -> Config {
    let file = Path::new(config_dir).join("config.toml");

    debug!("load config file {}", file.display());

    if let Ok(contents) = fs::read_to_string(&file) {
        let config: Result<Config, TomlError> = toml::from_str(&contents);

        match config {
            Ok(config) => return config,
            Err(err) => {
                error!("Error while deserializing the TOML file : {}", err);
            }
        }
    }

    debug!("Switch to default configuration");

    Config::default()
}
