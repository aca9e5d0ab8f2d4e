//! Sender suffix convention shared by the forwarder and every forwarding-aware target.
//!
//! A forwarded call carries `payload || originator`, where `originator` is the raw 20-byte
//! address (no ABI padding).

use alloc::vec::Vec;

use alloy_primitives::Address;

/// Width of the appended originator address.
pub const SENDER_SUFFIX_LEN: usize = 20;

/// Build the calldata a forwarder dispatches: `payload || sender`.
pub fn append_sender(payload: &[u8], sender: Address) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + SENDER_SUFFIX_LEN);
    out.extend_from_slice(payload);
    out.extend_from_slice(sender.as_slice());
    out
}

/// Split `payload || sender`; `None` if `data` is too short to carry a suffix.
pub fn split_sender(data: &[u8]) -> Option<(&[u8], Address)> {
    if data.len() < SENDER_SUFFIX_LEN {
        return None;
    }
    let (payload, suffix) = data.split_at(data.len() - SENDER_SUFFIX_LEN);
    Some((payload, Address::from_slice(suffix)))
}
