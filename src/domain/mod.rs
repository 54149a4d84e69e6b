// Domain layer: kernel records, the lookup table and the ports the pipeline is built on.

pub mod model;
pub mod ports;
pub mod table;
