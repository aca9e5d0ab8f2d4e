//! Effective-sender resolution for calls that may arrive through a trusted forwarder.
//!
//! Trust is looked up on every call against the current registry state; nothing is cached.

use alloy_primitives::Address;

use crate::suffix::split_sender;

/// Read-only view of the trusted-forwarder set.
pub trait TrustedForwarders {
    fn is_trusted_forwarder(&self, forwarder: Address) -> bool;
}

impl<F> TrustedForwarders for F
where
    F: Fn(Address) -> bool,
{
    fn is_trusted_forwarder(&self, forwarder: Address) -> bool {
        self(forwarder)
    }
}

/// Who the call is really from, and the calldata the business logic should see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedCall<'a> {
    pub sender: Address,
    pub data: &'a [u8],
}

/// Resolve `(sender, data)` for a call made by `caller` with raw calldata `data`.
///
/// The trailing address is honoured only when `caller` is currently trusted. An untrusted
/// caller gets its calldata back untouched, suffix included, and is itself the sender.
pub fn resolve_sender<'a, T>(forwarders: &T, caller: Address, data: &'a [u8]) -> ResolvedCall<'a>
where
    T: TrustedForwarders + ?Sized,
{
    if forwarders.is_trusted_forwarder(caller) {
        if let Some((payload, sender)) = split_sender(data) {
            return ResolvedCall {
                sender,
                data: payload,
            };
        }
    }
    ResolvedCall {
        sender: caller,
        data,
    }
}
