use std::fmt;

/// Errors produced at the transport boundary.
/// Every reqwest/serde failure is classified into one of these before it leaves the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection could not be established or dropped mid-request.
    Network,
    /// Request exceeded the configured deadline.
    Timeout,
    /// Server answered with a non-success status.
    Server(u16),
    /// Response body did not match the expected shape.
    Parse(String),
    /// Anything that doesn't fit the above.
    Unknown(String),
}

impl ApiError {
    /// User-facing copy for this error.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network => {
                "No internet connection. Please check your network and try again.".to_string()
            }
            ApiError::Timeout => "Request timed out. Please try again.".to_string(),
            ApiError::Server(404) => "Resource not found".to_string(),
            ApiError::Server(500) => "Server error. Please try again later.".to_string(),
            ApiError::Server(503) => "Service temporarily unavailable".to_string(),
            ApiError::Server(code) => format!("Server error ({code})"),
            ApiError::Parse(detail) | ApiError::Unknown(detail) => detail.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ApiError {}

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyQuery,
    EmptyPlanetId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyQuery => write!(f, "Search query cannot be empty"),
            ValidationError::EmptyPlanetId => write!(f, "Planet ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The single failure channel returned by the repository and use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Validation(ValidationError),
    Api(ApiError),
}

impl FetchError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FetchError::Validation(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Validation(e) => write!(f, "{e}"),
            FetchError::Api(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Validation(e) => Some(e),
            FetchError::Api(e) => Some(e),
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(e: ApiError) -> Self {
        FetchError::Api(e)
    }
}

impl From<ValidationError> for FetchError {
    fn from(e: ValidationError) -> Self {
        FetchError::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_messages() {
        assert_eq!(ApiError::Server(404).message(), "Resource not found");
        assert_eq!(ApiError::Server(500).message(), "Server error. Please try again later.");
        assert_eq!(ApiError::Server(503).message(), "Service temporarily unavailable");
        assert_eq!(ApiError::Server(418).message(), "Server error (418)");
    }

    #[test]
    fn test_detail_errors_display_their_detail() {
        let err = ApiError::Parse("Failed to parse response: eof".to_string());
        assert_eq!(err.to_string(), "Failed to parse response: eof");
        assert_eq!(ApiError::Unknown("boom".to_string()).to_string(), "boom");
    }

    #[test]
    fn test_fetch_error_kinds_are_distinguishable() {
        let validation: FetchError = ValidationError::EmptyQuery.into();
        let api: FetchError = ApiError::Timeout.into();
        assert!(validation.is_validation());
        assert!(!api.is_validation());
        assert_eq!(validation.to_string(), "Search query cannot be empty");
        assert_eq!(api.to_string(), "Request timed out. Please try again.");
    }
}
