// Domain layer: core models and ports. No HTTP or file IO here.

pub mod model;
pub mod ports;
