// Domain layer: journal models, the harvest message and ports (interfaces).

pub mod model;
pub mod ports;
