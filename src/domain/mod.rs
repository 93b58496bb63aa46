// Domain layer: core models and ports (interfaces). No dependencies beyond std/serde/uuid.

pub mod model;
pub mod ports;
