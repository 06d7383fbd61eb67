pub(crate) mod regions;
pub(crate) mod smooth;
pub(crate) mod tracker;
