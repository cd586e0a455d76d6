use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::error::CatalogError;
use serde_json::json;
use thiserror::Error;

/// Ошибки HTTP-обработчиков
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::NotFound { .. })
            | ApiError::Catalog(CatalogError::UnknownCatalog(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::Storage(_))
            | ApiError::Catalog(CatalogError::StorageUnavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found: ApiError = CatalogError::not_found("Course", "crs-999").into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let unknown: ApiError = CatalogError::UnknownCatalog("widgets".into()).into();
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

        let invalid: ApiError = CatalogError::InvalidRequest("Email is required".into()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let broken = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let storage: ApiError = CatalogError::from(broken).into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_carries_status() {
        let response = ApiError::from(CatalogError::InvalidRequest("bad tab".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
