//! Error types for the Assura gateway.
//!
//! Every failure a tool invocation can hit maps onto one of these variants.
//! The handler boundary in `assura-mcp` turns them into failure envelopes, so
//! the variants carry exactly what the envelope needs: a human-readable
//! message and, where one exists, the upstream HTTP status.

/// Errors that can occur while resolving credentials or calling an upstream
/// service.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Required auth parameters or configuration are missing or malformed.
    ///
    /// Detected before any network call.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is missing or malformed
        message: String,
    },

    /// The token exchange failed.
    #[error("Authentication failed: {message}")]
    Auth {
        /// Upstream HTTP status, absent for transport failures
        status: Option<u16>,
        /// Upstream status text or transport error
        message: String,
    },

    /// The upstream REST call returned a non-2xx status.
    ///
    /// Displays as the bare extracted message.
    #[error("{message}")]
    Upstream {
        /// Numeric HTTP status
        status: u16,
        /// Message extracted from the error body, or `HTTP <status>: <text>`
        message: String,
    },

    /// Transport-level failure (DNS, connection reset, timeout).
    #[error("Network error: {message}")]
    Network {
        /// Transport error description
        message: String,
    },

    /// Tool arguments failed validation.
    #[error(
        "Invalid parameter{}: {message}",
        .field.as_ref().map(|f| format!(" '{f}'")).unwrap_or_default()
    )]
    InvalidParams {
        /// Offending parameter, if a single one is to blame
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type alias for Assura operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Configuration { .. } => "configuration",
            Error::Auth { .. } => "auth",
            Error::Upstream { .. } => "upstream",
            Error::Network { .. } => "network",
            Error::InvalidParams { .. } => "invalid_params",
            Error::Serialization(_) => "serialization",
        }
    }

    /// HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Auth { status, .. } => *status,
            Error::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller retrying the same call could plausibly succeed.
    ///
    /// Advisory only: nothing in the gateway retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network { .. } => true,
            Error::Upstream { status, .. } => *status == 429 || *status >= 500,
            Error::Auth { status, .. } => matches!(status, None | Some(500..)),
            Error::Configuration { .. } => false,
            Error::InvalidParams { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new token-exchange error.
    pub fn auth<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        Error::Auth {
            status,
            message: message.into(),
        }
    }

    /// Creates a new upstream error.
    pub fn upstream<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Creates a new network error.
    pub fn network<S: Into<String>>(message: S) -> Self {
        Error::Network {
            message: message.into(),
        }
    }

    /// Creates a new validation error without a field name.
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Error::InvalidParams {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error for a specific parameter.
    pub fn invalid_param<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::InvalidParams {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}
