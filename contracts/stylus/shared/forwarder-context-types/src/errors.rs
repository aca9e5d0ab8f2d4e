use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

/// Errors from registry administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the administrator.
    Unauthorized { caller: Address },
    /// Registry mutation after the lock was engaged.
    Locked,
    /// Second lock attempt.
    AlreadyLocked,
    /// Zero address offered as the new administrator.
    InvalidOwner,
}

/// Errors while parsing or recovering an ECDSA signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureError {
    InvalidLength(usize),
    InvalidV(u8),
    /// `s` in the upper half of the curve order (malleable form).
    HighS,
    ZeroScalar,
    RecoveryFailed,
}

/// Failure reported by a [`crate::forwarder::Dispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Target reverted; carries the raw revert data.
    Reverted(Vec<u8>),
    /// Not enough gas was left to honour the requested gas limit.
    OutOfGas,
}

/// Errors from verifying or executing a forward request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwarderError {
    InvalidSignature,
    InvalidNonce {
        from: Address,
        expected: U256,
        provided: U256,
    },
    DispatchFailed(Vec<u8>),
    InsufficientGas { requested: U256 },
}

impl From<SignatureError> for ForwarderError {
    fn from(_: SignatureError) -> Self {
        ForwarderError::InvalidSignature
    }
}
