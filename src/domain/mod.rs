// Domain layer: record model and the ports the core is driven through.

pub mod model;
pub mod ports;
