#![forbid(unsafe_code)]

pub mod common;
pub mod device;
pub mod render;
pub mod session;
pub mod turn;

pub use common::{ContractViolation, Validate};
