pub mod accounts;
pub mod verifications;

pub use accounts::*;
pub use verifications::*;
