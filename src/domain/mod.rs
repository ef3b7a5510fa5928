// Domain layer: the todo table model and the ports the pipeline is generic over.

pub mod model;
pub mod ports;
