//! Command handlers for the docsplit CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod split;
pub mod verify;

// Re-export command types for convenience
pub use split::SplitCommand;
pub use verify::VerifyCommand;
