use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, U256},
    stylus_core::{
        calls::{context::Call, CallAccess},
        Host, MeteringAccess,
    },
};

use forwarder_context_types::DispatchError;

/// Call `to` with `value`, capped at `gas`.
///
/// EIP-150 keeps 1/64 of the remaining gas back from the callee. If no more than `gas / 63` is
/// left afterwards the callee may have been starved below `gas`, so the call counts as out of
/// gas whether or not it succeeded.
pub fn dispatch_call(
    vm: &dyn Host,
    to: Address,
    value: U256,
    gas: U256,
    calldata: &[u8],
) -> Result<Vec<u8>, DispatchError> {
    let config = Call::new().gas(gas.saturating_to::<u64>()).value(value);
    let result = vm.call(&config, to, calldata);

    if U256::from(vm.evm_gas_left()) <= gas / U256::from(63u64) {
        return Err(DispatchError::OutOfGas);
    }
    result.map_err(|err| DispatchError::Reverted(err.into()))
}
