//! In-memory trusted-forwarder registry.
//!
//! Off-chain counterpart of the registry contract: same authorisation order, same lock
//! semantics, same audit records. Each successful mutation returns the record it emits.

use alloc::collections::BTreeMap;

use alloy_primitives::Address;

use crate::{context::TrustedForwarders, errors::RegistryError, lock::LockState};

/// Audit records emitted by registry administration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryEvent {
    ForwarderTrustChanged {
        forwarder: Address,
        trusted: bool,
        admin: Address,
    },
    RegistryLocked {
        admin: Address,
    },
    OwnershipTransferred {
        previous: Address,
        new: Address,
    },
}

/// Admin gate shared by every mutating registry operation.
pub fn ensure_admin(admin: Address, caller: Address) -> Result<(), RegistryError> {
    if caller != admin {
        return Err(RegistryError::Unauthorized { caller });
    }
    Ok(())
}

/// Authorisation first, then lock state: a non-admin always sees `Unauthorized`.
pub fn authorize_trust_change(
    admin: Address,
    caller: Address,
    state: LockState,
) -> Result<(), RegistryError> {
    ensure_admin(admin, caller)?;
    state.ensure_open()
}

#[derive(Clone, Debug)]
pub struct ForwarderRegistry {
    admin: Address,
    trusted: BTreeMap<Address, bool>,
    state: LockState,
}

impl ForwarderRegistry {
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            trusted: BTreeMap::new(),
            state: LockState::Open,
        }
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn lock_state(&self) -> LockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub fn is_trusted(&self, forwarder: Address) -> bool {
        self.trusted.get(&forwarder).copied().unwrap_or(false)
    }

    /// Set the trust flag for `forwarder`. Idempotent; always emits.
    pub fn set_trust(
        &mut self,
        caller: Address,
        forwarder: Address,
        trusted: bool,
    ) -> Result<RegistryEvent, RegistryError> {
        authorize_trust_change(self.admin, caller, self.state)?;
        self.trusted.insert(forwarder, trusted);
        Ok(RegistryEvent::ForwarderTrustChanged {
            forwarder,
            trusted,
            admin: caller,
        })
    }

    /// Freeze the trusted set. There is no way back.
    pub fn lock(&mut self, caller: Address) -> Result<RegistryEvent, RegistryError> {
        ensure_admin(self.admin, caller)?;
        self.state = self.state.lock()?;
        Ok(RegistryEvent::RegistryLocked { admin: caller })
    }

    pub fn transfer_admin(
        &mut self,
        caller: Address,
        new_admin: Address,
    ) -> Result<RegistryEvent, RegistryError> {
        ensure_admin(self.admin, caller)?;
        if new_admin == Address::ZERO {
            return Err(RegistryError::InvalidOwner);
        }
        let previous = self.admin;
        self.admin = new_admin;
        Ok(RegistryEvent::OwnershipTransferred {
            previous,
            new: new_admin,
        })
    }
}

impl TrustedForwarders for ForwarderRegistry {
    fn is_trusted_forwarder(&self, forwarder: Address) -> bool {
        self.is_trusted(forwarder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Address {
        Address::repeat_byte(0xad)
    }

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn forwarder() -> Address {
        Address::repeat_byte(0xf0)
    }

    #[test]
    fn nothing_trusted_by_default() {
        let registry = ForwarderRegistry::new(admin());
        assert!(!registry.is_trusted(forwarder()));
        assert!(!registry.is_trusted(Address::ZERO));
        assert!(!registry.is_locked());
    }

    #[test]
    fn admin_sets_and_unsets_trust() {
        let mut registry = ForwarderRegistry::new(admin());
        let event = registry.set_trust(admin(), forwarder(), true).unwrap();
        assert_eq!(
            event,
            RegistryEvent::ForwarderTrustChanged {
                forwarder: forwarder(),
                trusted: true,
                admin: admin(),
            }
        );
        assert!(registry.is_trusted(forwarder()));

        let event = registry.set_trust(admin(), forwarder(), false).unwrap();
        assert!(matches!(
            event,
            RegistryEvent::ForwarderTrustChanged { trusted: false, .. }
        ));
        assert!(!registry.is_trusted(forwarder()));
    }

    #[test]
    fn last_write_wins_and_repeats_still_emit() {
        let mut registry = ForwarderRegistry::new(admin());
        for trusted in [true, true, false, true, false, false, true] {
            assert!(registry.set_trust(admin(), forwarder(), trusted).is_ok());
        }
        assert!(registry.is_trusted(forwarder()));
    }

    #[test]
    fn non_admin_is_unauthorized_in_every_state() {
        let mut registry = ForwarderRegistry::new(admin());
        assert_eq!(
            registry.set_trust(alice(), forwarder(), true),
            Err(RegistryError::Unauthorized { caller: alice() })
        );
        assert_eq!(
            registry.lock(alice()),
            Err(RegistryError::Unauthorized { caller: alice() })
        );

        registry.lock(admin()).unwrap();
        assert_eq!(
            registry.set_trust(alice(), forwarder(), true),
            Err(RegistryError::Unauthorized { caller: alice() })
        );
        assert_eq!(
            registry.lock(alice()),
            Err(RegistryError::Unauthorized { caller: alice() })
        );
    }

    #[test]
    fn lock_freezes_trusted_set() {
        let mut registry = ForwarderRegistry::new(admin());
        registry.set_trust(admin(), forwarder(), true).unwrap();
        assert_eq!(
            registry.lock(admin()),
            Ok(RegistryEvent::RegistryLocked { admin: admin() })
        );
        assert!(registry.is_locked());

        assert_eq!(
            registry.set_trust(admin(), forwarder(), false),
            Err(RegistryError::Locked)
        );
        assert_eq!(
            registry.set_trust(admin(), alice(), true),
            Err(RegistryError::Locked)
        );
        assert!(registry.is_trusted(forwarder()));
        assert!(!registry.is_trusted(alice()));
        assert!(registry.is_locked());
    }

    #[test]
    fn second_lock_fails() {
        let mut registry = ForwarderRegistry::new(admin());
        registry.lock(admin()).unwrap();
        assert_eq!(registry.lock(admin()), Err(RegistryError::AlreadyLocked));
        assert_eq!(registry.lock_state(), LockState::Locked);
    }

    #[test]
    fn transfer_admin_moves_the_gate() {
        let mut registry = ForwarderRegistry::new(admin());
        assert_eq!(
            registry.transfer_admin(admin(), alice()),
            Ok(RegistryEvent::OwnershipTransferred {
                previous: admin(),
                new: alice(),
            })
        );
        assert_eq!(registry.admin(), alice());
        assert_eq!(
            registry.set_trust(admin(), forwarder(), true),
            Err(RegistryError::Unauthorized { caller: admin() })
        );
        assert!(registry.set_trust(alice(), forwarder(), true).is_ok());
    }

    #[test]
    fn transfer_admin_rejects_zero_and_strangers() {
        let mut registry = ForwarderRegistry::new(admin());
        assert_eq!(
            registry.transfer_admin(admin(), Address::ZERO),
            Err(RegistryError::InvalidOwner)
        );
        assert_eq!(
            registry.transfer_admin(alice(), alice()),
            Err(RegistryError::Unauthorized { caller: alice() })
        );
        assert_eq!(registry.admin(), admin());
    }
}
