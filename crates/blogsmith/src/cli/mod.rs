//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! blogsmith binary.

mod check_config;
mod commands;
mod serve;

pub use check_config::handle_check_config_command;
pub use commands::{Cli, Commands};
pub use serve::handle_serve_command;
