pub(crate) mod healthz;
pub(crate) mod instances;
pub(crate) mod stress;
pub(crate) mod usage;
