// Domain layer: core models and ports (interfaces). No transport or library dependencies.

pub mod context;
pub mod model;
pub mod ports;
