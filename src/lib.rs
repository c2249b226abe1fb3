//! # parse-kernel - Constituency parser adapter
//!
//! Locates the bundled constituency parsing engine and builds the command
//! line that feeds a text file into it.
//!
//! parse-kernel provides:
//! - Engine location resolved from an explicit or discovered install root
//! - Shell command construction with a fixed language selector
//! - A structured invocation for callers that spawn the engine without a shell
//! - TOML configuration for non-default deployments

pub mod kernel;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use kernel::{CommandOptions, Invocation, KernelAdapter, Language};
pub use config::KernelConfig;

/// Adapter version, reported for diagnostics only
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for parse-kernel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parse-kernel operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot determine install root from executable path: {0}")]
    InstallRoot(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Config already exists at {0} (use --force to overwrite)")]
    ConfigExists(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert_eq!(VERSION, "0.0.2");
    }
}
