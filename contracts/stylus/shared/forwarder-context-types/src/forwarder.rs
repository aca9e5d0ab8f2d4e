//! Forwarding pipeline: verify, consume nonce, dispatch with the sender suffix.
//!
//! Generic over storage, signature recovery and call dispatch so the Stylus contract and the
//! off-chain harness run the same steps in the same order.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

use crate::{
    eip712::{forward_request_digest, ForwarderDomain},
    errors::{DispatchError, ForwarderError},
    nonces::{check_nonce, NonceStore},
    request::ForwardRequest,
    signature::{verify_signer, SignatureRecovery},
};

/// Issues the forwarded call.
pub trait Dispatcher {
    /// `Err(OutOfGas)` when the call could not have been given `gas`, whatever its outcome.
    fn dispatch(
        &mut self,
        to: Address,
        value: U256,
        gas: U256,
        calldata: &[u8],
    ) -> Result<Vec<u8>, DispatchError>;
}

/// Everything the pipeline needs from the chain (or from a stand-in for it).
pub trait ForwarderHost: NonceStore + SignatureRecovery + Dispatcher {}

impl<T> ForwarderHost for T where T: NonceStore + SignatureRecovery + Dispatcher + ?Sized {}

/// Check that `signature` authorises exactly `req` and that `req.nonce` is the stored one.
pub fn verify<R>(
    recovery: &R,
    domain: &ForwarderDomain,
    req: &ForwardRequest,
    signature: &[u8],
    current_nonce: U256,
) -> Result<(), ForwarderError>
where
    R: SignatureRecovery + ?Sized,
{
    let digest = forward_request_digest(domain, req);
    verify_signer(recovery, digest, signature, req.from)?;
    check_nonce(req.from, current_nonce, req.nonce)
}

/// Verify and execute `req`, returning the target's return data.
///
/// The nonce is advanced before dispatch so a reentrant call cannot replay it. If dispatch
/// fails the nonce is restored: a failed forward leaves no state behind.
pub fn execute<H>(
    host: &mut H,
    domain: &ForwarderDomain,
    req: &ForwardRequest,
    signature: &[u8],
) -> Result<Vec<u8>, ForwarderError>
where
    H: ForwarderHost + ?Sized,
{
    let current = host.nonce_of(req.from);
    verify(&*host, domain, req, signature, current)?;

    let next = current
        .checked_add(U256::from(1u64))
        .ok_or(ForwarderError::InvalidNonce {
            from: req.from,
            expected: current,
            provided: req.nonce,
        })?;
    host.set_nonce(req.from, next);

    match host.dispatch(req.to, req.value, req.gas, &req.forwarded_calldata()) {
        Ok(ret) => Ok(ret),
        Err(err) => {
            host.set_nonce(req.from, current);
            Err(match err {
                DispatchError::Reverted(reason) => ForwarderError::DispatchFailed(reason),
                DispatchError::OutOfGas => ForwarderError::InsufficientGas {
                    requested: req.gas,
                },
            })
        }
    }
}
