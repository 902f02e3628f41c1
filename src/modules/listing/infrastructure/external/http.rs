use std::time::Duration;

use reqwest::StatusCode;

use crate::shared::errors::{AppError, AppResult};

/// Shared HTTP plumbing for listing store clients
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Map an HTTP status onto the crate's error type
    pub fn handle_response_status(status: StatusCode, source_name: &str) -> AppResult<()> {
        if status.is_success() {
            return Ok(());
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(format!(
                "{} rate limit exceeded",
                source_name
            ))),
            StatusCode::NOT_FOUND => Err(AppError::NotFound(format!(
                "{} resource not found",
                source_name
            ))),
            StatusCode::BAD_REQUEST => Err(AppError::ApiError(format!(
                "Bad request to {}",
                source_name
            ))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::Unauthorized(
                format!("Access to {} was refused ({})", source_name, status),
            )),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::BAD_GATEWAY
            | StatusCode::GATEWAY_TIMEOUT => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable",
                source_name
            ))),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                source_name, status
            ))),
        }
    }

    pub fn create_http_client(timeout: Duration, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass() {
        assert!(CommonHttpHandler::handle_response_status(StatusCode::OK, "Store").is_ok());
        assert!(
            CommonHttpHandler::handle_response_status(StatusCode::PARTIAL_CONTENT, "Store").is_ok()
        );
    }

    #[test]
    fn maps_error_statuses() {
        assert!(matches!(
            CommonHttpHandler::handle_response_status(StatusCode::TOO_MANY_REQUESTS, "Store"),
            Err(AppError::RateLimitError(_))
        ));
        assert!(matches!(
            CommonHttpHandler::handle_response_status(StatusCode::UNAUTHORIZED, "Store"),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            CommonHttpHandler::handle_response_status(StatusCode::BAD_GATEWAY, "Store"),
            Err(AppError::ExternalServiceError(_))
        ));
        assert!(matches!(
            CommonHttpHandler::handle_response_status(StatusCode::IM_A_TEAPOT, "Store"),
            Err(AppError::ApiError(_))
        ));
    }
}
