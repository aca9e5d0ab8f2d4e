//! EIP-712 meta-transaction forwarder for Arbitrum Stylus.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

pub mod errors;
pub mod forwarder;
pub mod utils;

pub use forwarder::MinimalForwarder;
