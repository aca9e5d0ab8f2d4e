//! EIP-712 digest for forward requests.
//!
//! This is a frozen wire contract: signers and the on-chain verifier must produce identical
//! bytes. Domain name/version and the type string match the OpenZeppelin `MinimalForwarder`.

use alloc::vec::Vec;

use alloy_primitives::{keccak256, Address, FixedBytes, U256};

use crate::request::ForwardRequest;

pub const EIP712_DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

pub const FORWARD_REQUEST_TYPE: &[u8] =
    b"ForwardRequest(address from,address to,uint256 value,uint256 gas,uint256 nonce,bytes data)";

pub const FORWARDER_NAME: &[u8] = b"MinimalForwarder";
pub const FORWARDER_VERSION: &[u8] = b"0.0.1";

/// Domain separation parameters: the chain and the forwarder contract verifying the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwarderDomain {
    pub chain_id: u64,
    pub verifying_contract: Address,
}

impl ForwarderDomain {
    pub fn new(chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            chain_id,
            verifying_contract,
        }
    }

    pub fn separator(&self) -> FixedBytes<32> {
        let mut buf = Vec::with_capacity(32 * 5);
        buf.extend_from_slice(keccak256(EIP712_DOMAIN_TYPE).as_slice());
        buf.extend_from_slice(keccak256(FORWARDER_NAME).as_slice());
        buf.extend_from_slice(keccak256(FORWARDER_VERSION).as_slice());
        buf.extend_from_slice(&U256::from(self.chain_id).to_be_bytes::<32>());
        buf.extend_from_slice(&address_word(self.verifying_contract));
        keccak256(buf)
    }
}

/// `hashStruct(ForwardRequest)`; dynamic `data` is hashed in place.
pub fn forward_request_struct_hash(req: &ForwardRequest) -> FixedBytes<32> {
    let mut buf = Vec::with_capacity(32 * 7);
    buf.extend_from_slice(keccak256(FORWARD_REQUEST_TYPE).as_slice());
    buf.extend_from_slice(&address_word(req.from));
    buf.extend_from_slice(&address_word(req.to));
    buf.extend_from_slice(&req.value.to_be_bytes::<32>());
    buf.extend_from_slice(&req.gas.to_be_bytes::<32>());
    buf.extend_from_slice(&req.nonce.to_be_bytes::<32>());
    buf.extend_from_slice(keccak256(&req.data).as_slice());
    keccak256(buf)
}

/// Final digest: `keccak256("\x19\x01" || domainSeparator || structHash)`.
pub fn forward_request_digest(domain: &ForwarderDomain, req: &ForwardRequest) -> FixedBytes<32> {
    let mut buf = Vec::with_capacity(2 + 32 + 32);
    buf.extend_from_slice(b"\x19\x01");
    buf.extend_from_slice(domain.separator().as_slice());
    buf.extend_from_slice(forward_request_struct_hash(req).as_slice());
    keccak256(buf)
}

fn address_word(addr: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..32].copy_from_slice(addr.as_slice());
    word
}
