// Domain layer: the probe's data model and the ports the core depends on.

pub mod model;
pub mod ports;
