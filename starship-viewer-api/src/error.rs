use serde::{Deserialize, Serialize};

/// Unified error type for starship fetch operations.
///
/// All variants are serializable for structured error reporting. None of
/// them is retried automatically: one fetch is one request, and the caller
/// decides whether to ask again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A transport-level error occurred (DNS resolution failure, connection
    /// refused, timeout, etc.). Carries the underlying description verbatim.
    Network {
        /// Error details from the transport layer.
        detail: String,
    },

    /// The response body did not match the expected JSON shape.
    Decode {
        /// Details about the decode failure.
        detail: String,
    },

    /// The transport succeeded but the response carried no body at all.
    EmptyBody,
}

impl ApiError {
    /// Whether the error came from the transport rather than the payload.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Decode { detail } => {
                write!(f, "Decode error: {detail}")
            }
            Self::EmptyBody => {
                write!(f, "Empty response body")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
