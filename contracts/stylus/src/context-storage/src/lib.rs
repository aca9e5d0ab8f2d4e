//! Trusted-forwarder registry with ERC-2771 style sender resolution, for Arbitrum Stylus.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod context_storage;
pub mod errors;
pub mod interfaces;

pub use context_storage::ContextStorage;
