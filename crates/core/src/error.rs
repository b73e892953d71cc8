//! Unified error types for vidcat.
//!
//! Every variant renders with a stable code prefix so failures stay greppable in logs.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the vidcat server.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid source URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// The CSV source could not be fetched (network failure or non-success status).
    #[error("SOURCE_UNAVAILABLE: {0}")]
    SourceUnavailable(String),

    /// The CSV source exceeded the configured byte limit.
    #[error("SOURCE_TOO_LARGE: {0}")]
    SourceTooLarge(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::SourceUnavailable(msg) => (-32020, format!("catalog source unavailable: {msg}")),
            Error::SourceTooLarge(msg) => (-32021, format!("catalog source too large: {msg}")),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SourceUnavailable("status 503".to_string());
        assert!(err.to_string().contains("SOURCE_UNAVAILABLE"));
        assert!(err.to_string().contains("status 503"));
    }

    #[test]
    fn test_source_unavailable_to_mcp_error() {
        let mcp_err: McpError = Error::SourceUnavailable("status 500".to_string()).into();
        assert_eq!(mcp_err.code.0, -32020);
        assert!(mcp_err.message.contains("status 500"));
    }

    #[test]
    fn test_source_too_large_to_mcp_error() {
        let mcp_err: McpError = Error::SourceTooLarge("10 bytes exceeds 8".to_string()).into();
        assert_eq!(mcp_err.code.0, -32021);
    }

    #[test]
    fn test_invalid_url_to_mcp_error() {
        let mcp_err: McpError = Error::InvalidUrl("empty URL".to_string()).into();
        assert_eq!(mcp_err.code.0, -32003);
    }
}
