//! Error types and handling for Skillpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Skillpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkillpackError {
    // Package definition errors
    #[error("Package definitions not found: {path}")]
    #[diagnostic(
        code(skillpack::packages::not_found),
        help("packages.json must live in the skills repository root. Pass --templates <DIR>.")
    )]
    PackagesFileNotFound { path: String },

    #[error("Package '{name}' not found")]
    #[diagnostic(
        code(skillpack::packages::unknown),
        help("Run without --package to pick from the available packages interactively")
    )]
    PackageNotFound { name: String },

    #[error("Circular package inheritance: {chain}")]
    #[diagnostic(
        code(skillpack::packages::circular),
        help("Remove the 'extends' cycle from packages.json")
    )]
    CircularPackageInheritance { chain: String },

    // Platform errors
    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(skillpack::platform::not_supported),
        help("Supported platforms: claude, opencode")
    )]
    PlatformNotSupported { platform: String },

    // Configuration errors
    #[error("Failed to parse {path}")]
    #[diagnostic(code(skillpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(skillpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(skillpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skillpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkillpackError {
    fn from(err: std::io::Error) -> Self {
        SkillpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SkillpackError {
    fn from(err: serde_json::Error) -> Self {
        SkillpackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SkillpackError {
    fn from(err: serde_yaml::Error) -> Self {
        SkillpackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SkillpackError {
    fn from(err: inquire::InquireError) -> Self {
        SkillpackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkillpackError>;
