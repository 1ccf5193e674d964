// Domain layer: composite item tree, menu vocabulary, and the traits the patterns are built on.

pub mod model;
pub mod ports;
