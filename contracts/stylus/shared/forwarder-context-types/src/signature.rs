//! 65-byte ECDSA signatures (`r || s || v`) and the recovery seam.

use alloy_primitives::{b256, Address, FixedBytes};

use crate::errors::SignatureError;

pub const SIGNATURE_LEN: usize = 65;

/// secp256k1n / 2. Signatures with a larger `s` are rejected (EIP-2).
const SECP256K1N_HALF: FixedBytes<32> =
    b256!("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0");

/// Parsed signature with `v` normalised to 27/28.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    pub r: FixedBytes<32>,
    pub s: FixedBytes<32>,
    pub v: u8,
}

impl RecoverableSignature {
    /// Parse `r || s || v`. Accepts `v` in {0,1,27,28}.
    pub fn parse(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(SignatureError::InvalidLength(bytes.len()));
        }
        let r = FixedBytes::<32>::from_slice(&bytes[0..32]);
        let s = FixedBytes::<32>::from_slice(&bytes[32..64]);
        let v = match bytes[64] {
            27 | 28 => bytes[64],
            0 | 1 => bytes[64] + 27,
            other => return Err(SignatureError::InvalidV(other)),
        };
        if r == FixedBytes::ZERO || s == FixedBytes::ZERO {
            return Err(SignatureError::ZeroScalar);
        }
        // Big-endian words compare numerically.
        if s.as_slice() > SECP256K1N_HALF.as_slice() {
            return Err(SignatureError::HighS);
        }
        Ok(Self { r, s, v })
    }

    /// Recovery id (0 or 1).
    pub fn recovery_id(&self) -> u8 {
        self.v - 27
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[0..32].copy_from_slice(self.r.as_slice());
        out[32..64].copy_from_slice(self.s.as_slice());
        out[64] = self.v;
        out
    }
}

/// Recovers the signer of a 32-byte digest.
///
/// On-chain this is the `ecrecover` precompile; off-chain it is k256.
pub trait SignatureRecovery {
    fn recover(
        &self,
        digest: FixedBytes<32>,
        signature: &RecoverableSignature,
    ) -> Result<Address, SignatureError>;
}

/// Check that `signature` over `digest` was produced by `expected`.
pub fn verify_signer<R>(
    recovery: &R,
    digest: FixedBytes<32>,
    signature: &[u8],
    expected: Address,
) -> Result<(), SignatureError>
where
    R: SignatureRecovery + ?Sized,
{
    let parsed = RecoverableSignature::parse(signature)?;
    let recovered = recovery.recover(digest, &parsed)?;
    if recovered == Address::ZERO || recovered != expected {
        return Err(SignatureError::RecoveryFailed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(v: u8) -> [u8; SIGNATURE_LEN] {
        let mut sig = [0u8; SIGNATURE_LEN];
        sig[31] = 1;
        sig[63] = 2;
        sig[64] = v;
        sig
    }

    #[test]
    fn parses_canonical_v() {
        let sig = RecoverableSignature::parse(&raw(28)).unwrap();
        assert_eq!(sig.v, 28);
        assert_eq!(sig.recovery_id(), 1);
        assert_eq!(sig.to_bytes(), raw(28));
    }

    #[test]
    fn normalises_zero_one_v() {
        assert_eq!(RecoverableSignature::parse(&raw(0)).unwrap().v, 27);
        assert_eq!(RecoverableSignature::parse(&raw(1)).unwrap().v, 28);
    }

    #[test]
    fn rejects_bad_v_and_length() {
        assert_eq!(
            RecoverableSignature::parse(&raw(29)),
            Err(SignatureError::InvalidV(29))
        );
        assert_eq!(
            RecoverableSignature::parse(&raw(27)[..64]),
            Err(SignatureError::InvalidLength(64))
        );
    }

    #[test]
    fn rejects_zero_scalars() {
        let mut sig = raw(27);
        sig[31] = 0;
        assert_eq!(
            RecoverableSignature::parse(&sig),
            Err(SignatureError::ZeroScalar)
        );
    }

    #[test]
    fn rejects_high_s() {
        let mut sig = raw(27);
        sig[32..64].copy_from_slice(SECP256K1N_HALF.as_slice());
        assert!(RecoverableSignature::parse(&sig).is_ok());
        sig[63] = sig[63].wrapping_add(1);
        assert_eq!(RecoverableSignature::parse(&sig), Err(SignatureError::HighS));
    }

    struct Fixed(Address);

    impl SignatureRecovery for Fixed {
        fn recover(
            &self,
            _digest: FixedBytes<32>,
            _signature: &RecoverableSignature,
        ) -> Result<Address, SignatureError> {
            Ok(self.0)
        }
    }

    #[test]
    fn verify_signer_compares_recovered_address() {
        let alice = Address::repeat_byte(0xa1);
        let digest = FixedBytes::<32>::repeat_byte(0x01);
        assert!(verify_signer(&Fixed(alice), digest, &raw(27), alice).is_ok());
        assert_eq!(
            verify_signer(&Fixed(alice), digest, &raw(27), Address::repeat_byte(0xb2)),
            Err(SignatureError::RecoveryFailed)
        );
        assert_eq!(
            verify_signer(&Fixed(Address::ZERO), digest, &raw(27), Address::ZERO),
            Err(SignatureError::RecoveryFailed)
        );
    }
}
