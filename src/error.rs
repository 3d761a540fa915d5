//! Error types for the dashboard library

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {

    // =============================
    // Context
    // =============================

    #[error("financial context accessed before it was installed")]
    ContextNotInstalled,

    #[error("financial context is already installed")]
    ContextAlreadyInstalled,

    // =============================
    // Configuration
    // =============================

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
