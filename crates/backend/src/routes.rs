use std::path::PathBuf;

use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::{resolve_path, ServerConfig};
use crate::system;

/// Конфигурация всех роутов приложения
pub fn configure_routes(server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    api_routes()
        .fallback_service(ServeDir::new(dist_dir(&server.dist_dir)))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}

/// Только JSON API, без статики и слоёв
pub fn api_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // CATALOG LISTS
        // ========================================
        .route(
            "/api/catalogs/blueprints",
            get(handlers::catalogs::list_blueprints),
        )
        .route(
            "/api/catalogs/templates",
            get(handlers::catalogs::list_templates),
        )
        .route(
            "/api/catalogs/knowledge-center",
            get(handlers::catalogs::list_knowledge_center),
        )
        .route("/api/facets/:catalog", get(handlers::catalogs::get_facets))
        // ========================================
        // DETAILS
        // ========================================
        .route(
            "/api/catalogs/blueprints/:tab/:id",
            get(handlers::details::get_blueprint_detail),
        )
        .route(
            "/api/catalogs/knowledge-center/courses/:id",
            get(handlers::details::get_course_detail),
        )
}

/// Сборка SPA: рядом с exe, иначе относительно текущего каталога
fn dist_dir(configured: &str) -> PathBuf {
    let next_to_exe = resolve_path(configured);
    if next_to_exe.exists() {
        next_to_exe
    } else {
        PathBuf::from(configured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = api_routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let response = api_routes()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_templates_filtered_by_query_string() {
        let (status, body) = get_json("/api/catalogs/templates?templateType=Spreadsheet").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tab"], "all");
        for item in body["items"].as_array().unwrap() {
            assert_eq!(item["templateType"], "Spreadsheet");
        }
    }

    #[tokio::test]
    async fn test_detail_routes() {
        let (status, body) = get_json("/api/catalogs/blueprints/solution-specs/ss-002").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "generatedFromSpec");

        let (status, body) = get_json("/api/catalogs/knowledge-center/courses/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("missing"));
    }

    #[tokio::test]
    async fn test_facets_route() {
        let (status, body) = get_json("/api/facets/knowledge-center?tab=best-practices").await;
        assert_eq!(status, StatusCode::OK);
        let keys: Vec<&str> = body["groups"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["domain", "maturityLevel", "tags"]);
    }
}
