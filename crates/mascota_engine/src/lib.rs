#![forbid(unsafe_code)]

pub mod capability;
pub mod i18n;
pub mod render;
pub mod router;
pub mod speech;
pub mod state;
