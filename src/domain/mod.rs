// Domain layer: the box entity and the ports the collaborators implement.

pub mod model;
pub mod ports;
