//! Shared types for trusted-forwarder meta-transactions (on-chain/off-chain).
//!
//! Everything here is deterministic and storage-agnostic: the Stylus contracts back the
//! traits with contract storage and precompiles, the tooling backs them with memory and k256.

#![no_std]

extern crate alloc;

pub mod context;
pub mod eip712;
pub mod errors;
pub mod forwarder;
pub mod lock;
pub mod nonces;
pub mod registry;
pub mod request;
pub mod signature;
pub mod suffix;

pub use context::{resolve_sender, ResolvedCall, TrustedForwarders};
pub use eip712::{forward_request_digest, ForwarderDomain};
pub use errors::{DispatchError, ForwarderError, RegistryError, SignatureError};
pub use forwarder::{execute, verify, Dispatcher, ForwarderHost};
pub use lock::LockState;
pub use nonces::{NonceStore, NonceTable};
pub use registry::{ForwarderRegistry, RegistryEvent};
pub use request::ForwardRequest;
pub use signature::{RecoverableSignature, SignatureRecovery};
pub use suffix::{append_sender, split_sender, SENDER_SUFFIX_LEN};
