//! Host calls behind the forwarding seams (signature recovery, dispatch).

pub mod crypto;
pub mod dispatch;
