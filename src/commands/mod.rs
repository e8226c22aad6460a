//! Command implementations for the Skillpack CLI

pub mod completions;
pub mod install;
pub mod version;
