pub(crate) mod ease;
pub(crate) mod keyframes;
pub(crate) mod spring;
pub(crate) mod transition;
