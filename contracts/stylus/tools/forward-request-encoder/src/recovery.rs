//! k256-backed signature recovery, mirroring the on-chain `ecrecover` path.

use alloy_primitives::{Address, FixedBytes};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use forwarder_context_types::{RecoverableSignature, SignatureError, SignatureRecovery};

use crate::encoder::verifying_key_address;

pub struct K256Recovery;

impl SignatureRecovery for K256Recovery {
    fn recover(
        &self,
        digest: FixedBytes<32>,
        signature: &RecoverableSignature,
    ) -> Result<Address, SignatureError> {
        let bytes = signature.to_bytes();
        let sig = Signature::from_slice(&bytes[..64]).map_err(|_| SignatureError::RecoveryFailed)?;
        let recovery_id = RecoveryId::from_byte(signature.recovery_id())
            .ok_or(SignatureError::InvalidV(signature.v))?;
        let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)
            .map_err(|_| SignatureError::RecoveryFailed)?;
        Ok(verifying_key_address(&key))
    }
}
