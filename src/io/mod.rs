//! Input/output operations and error handling
//!
//! This module contains the driver around the plane engine:
//! - Command script parsing
//! - Result and drawing formatting
//! - The command-line interface
//! - Error types shared with the engine

/// Command-line interface for processing command scripts
pub mod cli;
/// Text command parsing
pub mod commands;
/// Driver constants
pub mod configuration;
/// Debug drawing dump and ASCII rendering
pub mod drawing;
/// Error types and the crate result alias
pub mod error;
/// Result formatting
pub mod report;
