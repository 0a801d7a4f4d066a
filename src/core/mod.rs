//! Core module for the credit-equivalency calculator

pub mod config;
pub mod grade;
pub mod models;
pub mod plan;
pub mod report;

/// Returns the current version of the `credit-bridge` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
