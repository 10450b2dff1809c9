// Domain layer: the verdict model and the traits the engine is generic over.

pub mod model;
pub mod ports;
