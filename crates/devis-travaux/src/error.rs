use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::estimator::{CatalogError, EstimatorError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Estimator(EstimatorError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Estimator(err) => write!(f, "estimate error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Estimator(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Estimator(EstimatorError::UnknownCategory(_)) => StatusCode::NOT_FOUND,
            AppError::Estimator(EstimatorError::InvalidNumericInput(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Estimator(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<EstimatorError> for AppError {
    fn from(value: EstimatorError) -> Self {
        Self::Estimator(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimator_errors_map_to_client_statuses() {
        let unknown = AppError::from(EstimatorError::UnknownCategory("roofing".to_string()));
        assert_eq!(unknown.into_response().status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(EstimatorError::InvalidNumericInput("abc".to_string()));
        assert_eq!(
            invalid.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let completed = AppError::from(EstimatorError::SessionCompleted);
        assert_eq!(completed.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn startup_failures_are_internal_errors() {
        let catalog = AppError::from(CatalogError::NoCategories);
        assert_eq!(
            catalog.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Config(ConfigError::InvalidPort).to_string(),
            "configuration error: APP_PORT must be a valid u16"
        );
    }
}
