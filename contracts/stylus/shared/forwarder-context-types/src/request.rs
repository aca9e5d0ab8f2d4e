use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

use crate::suffix::append_sender;

/// Meta-transaction request signed by `from` and relayed by a forwarder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardRequest {
    /// Originator (signer).
    pub from: Address,
    /// Target contract.
    pub to: Address,
    /// Wei forwarded with the call.
    pub value: U256,
    /// Gas limit for the dispatched call.
    pub gas: U256,
    /// Must equal the forwarder's stored nonce for `from`.
    pub nonce: U256,
    /// Calldata for `to`, before the sender suffix is appended.
    pub data: Vec<u8>,
}

impl ForwardRequest {
    /// Calldata actually sent to `to`.
    pub fn forwarded_calldata(&self) -> Vec<u8> {
        append_sender(&self.data, self.from)
    }
}
