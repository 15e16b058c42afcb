pub(crate) mod instances;
pub(crate) mod server;
pub(crate) mod stress;
pub(crate) mod usage;
