//! Shared library for `credit-bridge`
//! Contains the credit-equivalency core used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
