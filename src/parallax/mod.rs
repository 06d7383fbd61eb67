pub(crate) mod mapper;
pub(crate) mod progress;
pub(crate) mod rule;
