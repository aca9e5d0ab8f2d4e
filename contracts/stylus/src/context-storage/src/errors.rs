use alloy_sol_types::sol;
use stylus_sdk::{alloy_primitives::Address, stylus_proc::SolidityError};

use forwarder_context_types::RegistryError;

sol! {
    error Unauthorized(address caller);
    error Locked();
    error AlreadyLocked();
    error InvalidOwner(address owner);
    error UnknownSelector(bytes4 selector);
    error MalformedCalldata();
}

#[derive(SolidityError)]
pub enum ContextStorageError {
    Unauthorized(Unauthorized),
    Locked(Locked),
    AlreadyLocked(AlreadyLocked),
    InvalidOwner(InvalidOwner),
    UnknownSelector(UnknownSelector),
    MalformedCalldata(MalformedCalldata),
}

impl From<RegistryError> for ContextStorageError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Unauthorized { caller } => {
                ContextStorageError::Unauthorized(Unauthorized { caller })
            }
            RegistryError::Locked => ContextStorageError::Locked(Locked {}),
            RegistryError::AlreadyLocked => ContextStorageError::AlreadyLocked(AlreadyLocked {}),
            RegistryError::InvalidOwner => ContextStorageError::InvalidOwner(InvalidOwner {
                owner: Address::ZERO,
            }),
        }
    }
}
