//! Error types for the BrandGraph engine
//!
//! Every failing operation reports one of these values to its immediate caller:
//! - `thiserror` for ergonomic error definitions
//! - Domain variants (`AlreadyExists`, `NotFound`, `InvalidArgument`) for graph operations
//! - Ambient variants for configuration, catalog loading and I/O
//! - `ErrorKind` classification so callers can branch without matching every variant

use std::borrow::Cow;
use thiserror::Error;

/// Result type alias for BrandGraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the BrandGraph engine
#[derive(Debug, Error)]
pub enum Error {
    // ========================================================================
    // Graph Errors
    // ========================================================================
    #[error("{entity} already exists: {key}")]
    AlreadyExists { entity: &'static str, key: String },

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: Cow<'static, str> },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig {
        key: &'static str,
        message: Cow<'static, str>,
    },

    #[error("TOML configuration error: {0}")]
    Toml(#[from] toml::de::Error),

    // ========================================================================
    // Catalog Loading Errors
    // ========================================================================
    #[error("Malformed brand catalog at line {line}: {message}")]
    CatalogFormat {
        line: usize,
        message: Cow<'static, str>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    InvalidArgument,
    Config,
    Io,
    Internal,
}

impl Error {
    // ========================================================================
    // Constructors for common error patterns
    // ========================================================================

    /// Create an already-exists error
    pub fn already_exists(entity: &'static str, key: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity,
            key: key.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a catalog format error for a 1-based line number
    pub fn catalog_format(line: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::CatalogFormat {
            line,
            message: message.into(),
        }
    }

    // ========================================================================
    // Error Classification
    // ========================================================================

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::InvalidConfig { .. } | Error::Toml(_) | Error::CatalogFormat { .. } => {
                ErrorKind::Config
            }
            Error::Io(_) => ErrorKind::Io,
            Error::Other(_) => ErrorKind::Internal,
        }
    }

    /// Stable error code for presentation layers
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::AlreadyExists { .. } => "ALREADY_EXISTS",
            Error::NotFound { .. } => "NOT_FOUND",
            Error::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Error::InvalidConfig { .. } | Error::Toml(_) => "CONFIG_ERROR",
            Error::CatalogFormat { .. } => "CATALOG_FORMAT",
            Error::Io(_) => "IO_ERROR",
            Error::Other(_) => "INTERNAL_ERROR",
        }
    }
}
