//! Off-chain tooling for trusted-forwarder meta-transactions.

pub mod encoder;
pub mod recovery;
pub mod types;

pub use forwarder_context_types as context;
