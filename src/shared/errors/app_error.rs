use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    /// Map a non-success HTTP status from a named service to an error variant
    pub fn from_status(service: &str, status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            429 => AppError::RateLimitError(format!("{} returned too many requests", service)),
            404 => AppError::NotFound(format!("{} resource not found", service)),
            401 | 403 => AppError::Unauthorized(format!("{} refused access ({})", service, status)),
            _ => AppError::ApiError(format!("{} returned error: {}", service, status)),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::from_status("External service", status)
        } else {
            AppError::ExternalServiceError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            AppError::from_status("Catalog", StatusCode::NOT_FOUND),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from_status("Backend", StatusCode::UNAUTHORIZED),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from_status("Catalog", StatusCode::TOO_MANY_REQUESTS),
            AppError::RateLimitError(_)
        ));
        assert!(matches!(
            AppError::from_status("Catalog", StatusCode::BAD_GATEWAY),
            AppError::ApiError(_)
        ));
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(AppError::NotFound("book".to_string())).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "book");
    }

    #[test]
    fn test_parse_int_error_is_invalid_input() {
        let err: AppError = "abc".parse::<u32>().unwrap_err().into();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
