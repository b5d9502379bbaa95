// Domain layer: the scraped record and the ports the core depends on.

pub mod model;
pub mod ports;
