//! CLI command handlers for `credit-bridge`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod course;
pub mod report;

use credit_bridge::config::Config;
use credit_bridge::core::models::Session;
use std::path::PathBuf;

/// Resolve the session file path from configuration
pub fn session_path(config: &Config) -> PathBuf {
    if config.paths.session_file.is_empty() {
        Config::get_creditbridge_dir().join("session.json")
    } else {
        PathBuf::from(&config.paths.session_file)
    }
}

/// Load the session for a command, recovering to defaults on bad data
pub fn load_session(config: &Config) -> Session {
    Session::load_or_default(session_path(config))
}

/// Persist the session after a mutation, reporting failure to the user
pub fn save_session(session: &Session, config: &Config) -> bool {
    let path = session_path(config);
    match session.save(&path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("✗ Failed to save session to {}: {e}", path.display());
            false
        }
    }
}
