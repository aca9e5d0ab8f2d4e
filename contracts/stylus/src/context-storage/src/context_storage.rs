//! Owner-governed trusted-forwarder registry in front of a forwarding-aware payload.
//!
//! Design notes:
//! - The owner (set once by the constructor) is the only identity allowed to change the
//!   trusted set or engage the lock. The lock is one-way; after it, the set is frozen.
//! - Payload calls arrive through the fallback so the raw calldata is available. The effective
//!   sender is resolved per call against the current trusted set, never cached.
//! - A call from an untrusted relayer is treated as the relayer's own call: its trailing
//!   address is not stripped and stays visible to the payload.

use alloc::vec::Vec;

use alloy_sol_types::SolCall;
use stylus_sdk::{
    alloy_primitives::{Address, Bytes, FixedBytes},
    prelude::*,
    stylus_core::log,
    ArbResult,
};

use forwarder_context_types::{
    registry::{authorize_trust_change, ensure_admin},
    resolve_sender, LockState, RegistryError, TrustedForwarders,
};

use crate::{
    errors::{ContextStorageError, MalformedCalldata, UnknownSelector},
    interfaces::{
        recordCall, ForwarderTrustChanged, OwnershipTransferred, Recorded, RegistryLocked,
    },
};

sol_storage! {
    #[entrypoint]
    pub struct ContextStorage {
        /// Administrator of the trusted set.
        address owner;

        mapping(address => bool) trusted_forwarders;

        /// Persisted `LockState` (`true` = locked).
        bool trusted_forwarders_locked;
    }
}

#[public]
impl ContextStorage {
    #[constructor]
    pub fn constructor(&mut self, owner: Address) {
        if owner == Address::ZERO {
            panic!("Invalid owner");
        }
        self.owner.set(owner);
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    /// Hand the administrator role to `new_owner`. Allowed after locking.
    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), ContextStorageError> {
        let caller = self.vm().msg_sender();
        let previous = self.owner.get();
        ensure_admin(previous, caller)?;
        if new_owner == Address::ZERO {
            return Err(RegistryError::InvalidOwner.into());
        }
        self.owner.set(new_owner);
        log(
            self.vm(),
            OwnershipTransferred {
                previousOwner: previous,
                newOwner: new_owner,
            },
        );
        Ok(())
    }

    pub fn is_trusted_forwarder(&self, forwarder: Address) -> bool {
        self.trusted_forwarders.get(forwarder)
    }

    pub fn trusted_forwarders_locked(&self) -> bool {
        self.lock_state().is_locked()
    }

    /// Set or clear trust for `forwarder`. Repeating a value still succeeds and still emits.
    pub fn set_trusted_forwarder(
        &mut self,
        forwarder: Address,
        trusted: bool,
    ) -> Result<(), ContextStorageError> {
        let caller = self.vm().msg_sender();
        authorize_trust_change(self.owner.get(), caller, self.lock_state())?;
        self.trusted_forwarders.insert(forwarder, trusted);
        log(
            self.vm(),
            ForwarderTrustChanged {
                forwarder,
                trusted,
                admin: caller,
            },
        );
        Ok(())
    }

    /// Freeze the trusted set permanently.
    pub fn lock_trusted_forwarders(&mut self) -> Result<(), ContextStorageError> {
        let caller = self.vm().msg_sender();
        ensure_admin(self.owner.get(), caller)?;
        let next = self.lock_state().lock()?;
        self.trusted_forwarders_locked.set(next.is_locked());
        log(self.vm(), RegistryLocked { admin: caller });
        Ok(())
    }

    /// Payload entry point. Resolves the sender, then routes `record(bytes)`.
    #[fallback]
    pub fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        let caller = self.vm().msg_sender();
        let resolved = resolve_sender(&*self, caller, calldata);
        self.route(resolved.sender, resolved.data)
    }
}

impl ContextStorage {
    fn lock_state(&self) -> LockState {
        LockState::from_flag(self.trusted_forwarders_locked.get())
    }

    fn route(&self, sender: Address, data: &[u8]) -> ArbResult {
        if data.len() < 4 {
            return Err(malformed());
        }
        if data[..4] != recordCall::SELECTOR {
            return Err(ContextStorageError::UnknownSelector(UnknownSelector {
                selector: FixedBytes::<4>::from_slice(&data[..4]),
            })
            .into());
        }
        // Non-validating decode: bytes after the ABI arguments are tolerated.
        let call = recordCall::abi_decode(data, false).map_err(|_| malformed())?;
        log(
            self.vm(),
            Recorded {
                sender,
                data: call.data,
                msgData: Bytes::copy_from_slice(data),
            },
        );
        Ok(Vec::new())
    }
}

fn malformed() -> Vec<u8> {
    ContextStorageError::MalformedCalldata(MalformedCalldata {}).into()
}

impl TrustedForwarders for ContextStorage {
    fn is_trusted_forwarder(&self, forwarder: Address) -> bool {
        self.trusted_forwarders.get(forwarder)
    }
}
