pub(crate) mod config;
pub(crate) mod frame;
pub(crate) mod runtime;
