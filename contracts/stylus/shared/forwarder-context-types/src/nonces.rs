//! Per-originator replay nonces.

use alloc::collections::BTreeMap;

use alloy_primitives::{Address, U256};

use crate::errors::ForwarderError;

/// Storage for the next expected nonce of each originator (unknown originators start at 0).
pub trait NonceStore {
    fn nonce_of(&self, from: Address) -> U256;
    fn set_nonce(&mut self, from: Address, nonce: U256);
}

/// Reject anything but the exact stored nonce (covers replays and skips).
pub fn check_nonce(from: Address, expected: U256, provided: U256) -> Result<(), ForwarderError> {
    if provided != expected {
        return Err(ForwarderError::InvalidNonce {
            from,
            expected,
            provided,
        });
    }
    Ok(())
}

/// In-memory nonce table.
#[derive(Clone, Debug, Default)]
pub struct NonceTable {
    next: BTreeMap<Address, U256>,
}

impl NonceTable {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceStore for NonceTable {
    fn nonce_of(&self, from: Address) -> U256 {
        self.next.get(&from).copied().unwrap_or(U256::ZERO)
    }

    fn set_nonce(&mut self, from: Address, nonce: U256) {
        self.next.insert(from, nonce);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_originator_starts_at_zero() {
        let table = NonceTable::new();
        assert_eq!(table.nonce_of(Address::repeat_byte(1)), U256::ZERO);
    }

    #[test]
    fn entries_are_per_originator() {
        let mut table = NonceTable::new();
        table.set_nonce(Address::repeat_byte(1), U256::from(3u64));
        assert_eq!(table.nonce_of(Address::repeat_byte(1)), U256::from(3u64));
        assert_eq!(table.nonce_of(Address::repeat_byte(2)), U256::ZERO);
    }

    #[test]
    fn check_nonce_requires_exact_match() {
        let from = Address::repeat_byte(1);
        let two = U256::from(2u64);
        assert!(check_nonce(from, two, two).is_ok());
        assert_eq!(
            check_nonce(from, two, U256::from(1u64)),
            Err(ForwarderError::InvalidNonce {
                from,
                expected: two,
                provided: U256::from(1u64),
            })
        );
        assert!(check_nonce(from, two, U256::from(3u64)).is_err());
    }
}
