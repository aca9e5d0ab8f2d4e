//! Signature recovery through the `ecrecover` precompile.

use stylus_sdk::{
    alloy_primitives::{address, Address, FixedBytes},
    stylus_core::{
        calls::{context::Call, CallAccess},
        Host,
    },
};

use forwarder_context_types::{RecoverableSignature, SignatureError};

/// `ecrecover` lives at precompile address `0x01`.
pub const ECRECOVER: Address = address!("0000000000000000000000000000000000000001");

const ECRECOVER_GAS: u64 = 50_000;

/// Precompile input: `digest || v || r || s`, each a 32-byte word.
pub fn ecrecover_input(digest: FixedBytes<32>, signature: &RecoverableSignature) -> [u8; 128] {
    let mut input = [0u8; 128];
    input[0..32].copy_from_slice(digest.as_slice());
    input[63] = signature.v;
    input[64..96].copy_from_slice(signature.r.as_slice());
    input[96..128].copy_from_slice(signature.s.as_slice());
    input
}

pub fn ecrecover(
    vm: &dyn Host,
    digest: FixedBytes<32>,
    signature: &RecoverableSignature,
) -> Result<Address, SignatureError> {
    let input = ecrecover_input(digest, signature);
    let out = vm
        .static_call(&Call::new().gas(ECRECOVER_GAS), ECRECOVER, &input)
        .map_err(|_| SignatureError::RecoveryFailed)?;
    // Empty output means recovery failed; otherwise the address is the low 20 bytes.
    if out.len() < 32 {
        return Err(SignatureError::RecoveryFailed);
    }
    let recovered = Address::from_slice(&out[12..32]);
    if recovered == Address::ZERO {
        return Err(SignatureError::RecoveryFailed);
    }
    Ok(recovered)
}
