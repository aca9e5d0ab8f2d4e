//! One-way latch that freezes the trusted-forwarder registry.

use crate::errors::RegistryError;

/// Registry lock state. `Locked` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Open,
    Locked,
}

impl LockState {
    /// Map a persisted flag (storage keeps a `bool`) to the state.
    pub fn from_flag(locked: bool) -> Self {
        if locked {
            LockState::Locked
        } else {
            LockState::Open
        }
    }

    pub fn is_locked(self) -> bool {
        self == LockState::Locked
    }

    /// Gate for every registry mutation.
    pub fn ensure_open(self) -> Result<(), RegistryError> {
        match self {
            LockState::Open => Ok(()),
            LockState::Locked => Err(RegistryError::Locked),
        }
    }

    /// The only transition: `Open -> Locked`.
    pub fn lock(self) -> Result<LockState, RegistryError> {
        match self {
            LockState::Open => Ok(LockState::Locked),
            LockState::Locked => Err(RegistryError::AlreadyLocked),
        }
    }
}
