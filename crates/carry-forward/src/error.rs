use prep_html_fragment::FragmentError;
use thiserror::Error;

/// Result type for carry-forward operations
pub type Result<T> = std::result::Result<T, CarryForwardError>;

/// Errors raised while setting up carry-forward.
///
/// Composing pages never fails; these only come out of configuration and
/// catalogue loading, plus fragment errors that are converted to soft
/// "not found" signals before they reach callers.
#[derive(Error, Debug)]
pub enum CarryForwardError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Localization catalogue is not a flat JSON string map
    #[error("Catalogue error: {0}")]
    Catalogue(#[from] serde_json::Error),

    /// HTML fragment could not be built
    #[error("Fragment error: {0}")]
    Fragment(#[from] FragmentError),
}

impl CarryForwardError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
