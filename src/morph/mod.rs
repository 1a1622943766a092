pub(crate) mod active;
pub(crate) mod frame;
pub(crate) mod interpolate;
pub(crate) mod options;
pub(crate) mod plan;
pub(crate) mod pose;
pub(crate) mod sample;
