use alloy_sol_types::sol;
use stylus_sdk::{alloy_primitives::Bytes, stylus_proc::SolidityError};

use forwarder_context_types::ForwarderError;

sol! {
    error InvalidSignature();
    error InvalidNonce(address from, uint256 expected, uint256 provided);
    /// Target reverted; `reason` is its raw revert data.
    error DispatchFailed(bytes reason);
    /// Forwarder ran too low on gas to have honoured `requested` for the target.
    error InsufficientGas(uint256 requested);
}

#[derive(SolidityError)]
pub enum ForwarderRevert {
    InvalidSignature(InvalidSignature),
    InvalidNonce(InvalidNonce),
    DispatchFailed(DispatchFailed),
    InsufficientGas(InsufficientGas),
}

impl From<ForwarderError> for ForwarderRevert {
    fn from(err: ForwarderError) -> Self {
        match err {
            ForwarderError::InvalidSignature => {
                ForwarderRevert::InvalidSignature(InvalidSignature {})
            }
            ForwarderError::InvalidNonce {
                from,
                expected,
                provided,
            } => ForwarderRevert::InvalidNonce(InvalidNonce {
                from,
                expected,
                provided,
            }),
            ForwarderError::DispatchFailed(reason) => {
                ForwarderRevert::DispatchFailed(DispatchFailed {
                    reason: Bytes::from(reason),
                })
            }
            ForwarderError::InsufficientGas { requested } => {
                ForwarderRevert::InsufficientGas(InsufficientGas { requested })
            }
        }
    }
}
