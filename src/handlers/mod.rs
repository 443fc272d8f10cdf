//! HTTP handlers bound to the contract endpoints.

pub mod counter;
pub mod greeting;
pub use counter::*;
pub use greeting::*;
