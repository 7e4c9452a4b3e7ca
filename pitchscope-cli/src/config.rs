//! Configuration module
//!
//! Handles CLI configuration, currently just the evaluation API address.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the evaluation service
    pub api_url: String,
}
