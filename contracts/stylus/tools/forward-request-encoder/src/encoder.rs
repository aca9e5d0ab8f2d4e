use alloy_primitives::{Address, Bytes, FixedBytes};
use alloy_sol_types::{sol, SolCall};
use k256::ecdsa::{SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};

use forwarder_context_types::{
    forward_request_digest, signature::SIGNATURE_LEN, ForwardRequest, ForwarderDomain,
};

sol! {
    struct ForwardRequestAbi {
        address from;
        address to;
        uint256 value;
        uint256 gas;
        uint256 nonce;
        bytes data;
    }

    function execute(ForwardRequestAbi req, bytes signature) returns (bytes);
    function record(bytes data);
}

fn keccak256_bytes(bytes: &[u8]) -> FixedBytes<32> {
    let mut h = Keccak256::new();
    h.update(bytes);
    let out = h.finalize();
    let mut b = [0u8; 32];
    b.copy_from_slice(out.as_slice());
    FixedBytes(b)
}

/// Ethereum address of `key`: the low 20 bytes of `keccak256(x || y)`.
pub fn verifying_key_address(key: &VerifyingKey) -> Address {
    // Uncompressed SEC1: `0x04 || x || y`.
    let point = key.to_encoded_point(false);
    let hash = keccak256_bytes(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..32])
}

/// Ethereum address controlled by `signing_key`.
pub fn signer_address(signing_key: &SigningKey) -> Address {
    verifying_key_address(signing_key.verifying_key())
}

/// Sign the EIP-712 digest of `req` and return `r || s || v` with `v` in {27, 28}.
///
/// k256 produces low-S signatures, which is what the forwarder requires.
pub fn sign_request(
    domain: &ForwarderDomain,
    req: &ForwardRequest,
    signing_key: &SigningKey,
) -> Result<[u8; SIGNATURE_LEN], k256::ecdsa::Error> {
    let digest = forward_request_digest(domain, req);
    let (signature, recovery_id) = signing_key.sign_prehash_recoverable(digest.as_slice())?;

    let mut out = [0u8; SIGNATURE_LEN];
    out[..64].copy_from_slice(&signature.to_bytes());
    out[64] = 27 + recovery_id.to_byte();
    Ok(out)
}

/// Calldata for `MinimalForwarder.execute(req, signature)`, as submitted by a relayer.
pub fn encode_execute_calldata(req: &ForwardRequest, signature: &[u8]) -> Vec<u8> {
    executeCall {
        req: ForwardRequestAbi {
            from: req.from,
            to: req.to,
            value: req.value,
            gas: req.gas,
            nonce: req.nonce,
            data: Bytes::copy_from_slice(&req.data),
        },
        signature: Bytes::copy_from_slice(signature),
    }
    .abi_encode()
}

/// Calldata for the demo payload `record(bytes)` on the registry contract.
pub fn encode_record_calldata(data: &[u8]) -> Vec<u8> {
    recordCall {
        data: Bytes::copy_from_slice(data),
    }
    .abi_encode()
}
