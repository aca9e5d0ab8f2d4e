//! Meta-transaction forwarder.
//!
//! Design notes:
//! - A request is authorised by an EIP-712 signature of its originator (`from`) over all six
//!   request fields, bound to this chain and this contract.
//! - Nonces are per originator and must match exactly. The nonce is consumed before the
//!   target is called; any failure reverts, so a failed forward changes nothing.
//! - The target receives `data || from` and is expected to honour the suffix only if it
//!   trusts this forwarder.
//! - A forward that leaves no more than `gas / 63` behind reverts with `InsufficientGas`.

use alloc::vec::Vec;

use alloy_sol_types::sol;
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, FixedBytes, U256},
    prelude::*,
    stylus_core::log,
};

use forwarder_context_types::{
    forwarder::{execute as execute_request, verify as verify_request},
    DispatchError, Dispatcher, ForwardRequest, ForwarderDomain, NonceStore,
    RecoverableSignature, SignatureError, SignatureRecovery,
};

use crate::{
    errors::ForwarderRevert,
    utils::{crypto::ecrecover, dispatch::dispatch_call},
};

sol! {
    event Forwarded(address indexed from, address indexed to, uint256 nonce);
}

/// ABI shape of `ForwardRequest`: `(from, to, value, gas, nonce, data)`.
///
/// A tuple is used instead of a `sol!` struct because Stylus' `#[public]` glue supports tuples
/// via `AbiType`, and a Solidity struct is ABI-equivalent to a tuple.
pub type ForwardRequestAbi = (Address, Address, U256, U256, U256, Bytes);

sol_storage! {
    #[entrypoint]
    pub struct MinimalForwarder {
        /// Next expected nonce per originator.
        mapping(address => uint256) nonces;
    }
}

#[public]
impl MinimalForwarder {
    pub fn get_nonce(&self, from: Address) -> U256 {
        self.nonces.get(from)
    }

    pub fn domain_separator(&self) -> FixedBytes<32> {
        self.domain().separator()
    }

    /// Whether `execute` would accept `req` right now (signature and nonce only).
    pub fn verify(&self, req: ForwardRequestAbi, signature: Bytes) -> bool {
        let req = into_request(req);
        verify_request(
            self,
            &self.domain(),
            &req,
            &signature,
            self.nonces.get(req.from),
        )
        .is_ok()
    }

    /// Verify `req`, consume its nonce and call `req.to` with `req.data || req.from`.
    #[payable]
    pub fn execute(
        &mut self,
        req: ForwardRequestAbi,
        signature: Bytes,
    ) -> Result<Bytes, ForwarderRevert> {
        let req = into_request(req);
        let domain = self.domain();
        let ret = execute_request(self, &domain, &req, &signature)?;
        log(
            self.vm(),
            Forwarded {
                from: req.from,
                to: req.to,
                nonce: req.nonce,
            },
        );
        Ok(Bytes::from(ret))
    }
}

impl MinimalForwarder {
    fn domain(&self) -> ForwarderDomain {
        ForwarderDomain::new(self.vm().chain_id(), self.vm().contract_address())
    }
}

impl NonceStore for MinimalForwarder {
    fn nonce_of(&self, from: Address) -> U256 {
        self.nonces.get(from)
    }

    fn set_nonce(&mut self, from: Address, nonce: U256) {
        self.nonces.insert(from, nonce);
    }
}

impl SignatureRecovery for MinimalForwarder {
    fn recover(
        &self,
        digest: FixedBytes<32>,
        signature: &RecoverableSignature,
    ) -> Result<Address, SignatureError> {
        ecrecover(self.vm(), digest, signature)
    }
}

impl Dispatcher for MinimalForwarder {
    fn dispatch(
        &mut self,
        to: Address,
        value: U256,
        gas: U256,
        calldata: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        dispatch_call(self.vm(), to, value, gas, calldata)
    }
}

pub(crate) fn into_request(req: ForwardRequestAbi) -> ForwardRequest {
    let (from, to, value, gas, nonce, data) = req;
    ForwardRequest {
        from,
        to,
        value,
        gas,
        nonce,
        data: data.to_vec(),
    }
}
