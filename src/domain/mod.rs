// Domain layer: CPF checksum, request/response models and ports. No I/O.

pub mod cpf;
pub mod model;
pub mod ports;
