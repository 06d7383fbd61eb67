pub(crate) mod animator;
pub(crate) mod stagger;
pub(crate) mod visibility;
