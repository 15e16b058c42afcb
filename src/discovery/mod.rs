mod client;
mod consul;
mod error;
mod registry;

pub(crate) use client::DiscoveryClient;
pub(crate) use consul::ConsulRegistry;
pub(crate) use error::RegistryError;
pub(crate) use registry::Registry;
