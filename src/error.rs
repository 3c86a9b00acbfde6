use std::io;
use thiserror::Error;

/// Custom error type for the CyberSys dashboard
#[derive(Error, Debug)]
pub enum CyberSysError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for the CyberSys dashboard
pub type Result<T> = std::result::Result<T, CyberSysError>;

impl CyberSysError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        CyberSysError::Config(msg.into())
    }

    /// Create a runtime error
    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        CyberSysError::Runtime(msg.into())
    }
}
