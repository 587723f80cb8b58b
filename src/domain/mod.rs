// Domain layer: record types and the traits the collectors depend on. No external dependencies beyond std/serde.

pub mod model;
pub mod ports;
