// Adapters layer: concrete implementations for external systems (deployment topology, REST).

pub mod deployment;
pub mod http;
