// Adapters layer: deliver requests to the core handler from concrete runtimes.

pub mod http;
pub mod lambda;
