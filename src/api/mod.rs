pub(crate) mod action;
pub(crate) mod dto;
pub(crate) mod forward;
pub(crate) mod server;
