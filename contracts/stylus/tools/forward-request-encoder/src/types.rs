use alloy_primitives::{Address, Bytes, U256};
use serde::Deserialize;

use forwarder_context_types::ForwardRequest;

/// Forward request as read from JSON by the signing CLI.
///
/// `from` is optional: the signer's address is used, and a mismatch is an error.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestFile {
    #[serde(default)]
    pub from: Option<Address>,
    pub to: Address,
    #[serde(default)]
    pub value: U256,
    pub gas: U256,
    #[serde(default)]
    pub nonce: U256,
    #[serde(default)]
    pub data: Bytes,
}

impl RequestFile {
    pub fn into_request(self, from: Address) -> ForwardRequest {
        ForwardRequest {
            from,
            to: self.to,
            value: self.value,
            gas: self.gas,
            nonce: self.nonce,
            data: self.data.to_vec(),
        }
    }
}
