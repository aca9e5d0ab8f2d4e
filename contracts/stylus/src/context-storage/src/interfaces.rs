//! Events and the demo payload call.

use alloy_sol_types::sol;

sol! {
    event ForwarderTrustChanged(address indexed forwarder, bool trusted, address indexed admin);
    event RegistryLocked(address indexed admin);
    event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);

    /// `msgData` is the calldata as seen after sender resolution.
    event Recorded(address indexed sender, bytes data, bytes msgData);

    function record(bytes data);
}
