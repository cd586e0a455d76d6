use axum::extract::Path;
use axum::Json;

use contracts::projections::p100_blueprint_detail::{self, BlueprintDetail};
use contracts::projections::p101_course_detail::{self, CourseDetail};
use contracts::shared::error::CatalogError;
use contracts::shared::tabs::{BlueprintTab, CatalogTab};

use crate::shared::api_error::ApiError;

/// GET /api/catalogs/blueprints/:tab/:id
///
/// Вкладка в пути влияет только на ссылку "назад"; поиск идёт по id.
pub async fn get_blueprint_detail(
    Path((tab, id)): Path<(String, String)>,
) -> Result<Json<BlueprintDetail>, ApiError> {
    let tab = BlueprintTab::from_query(Some(&tab));
    tracing::debug!("blueprint detail requested: tab={}, id={}", tab.code(), id);

    match p100_blueprint_detail::get_blueprint_detail(&id) {
        Some(detail) => Ok(Json(detail)),
        None => Err(CatalogError::not_found("Blueprint", id).into()),
    }
}

/// GET /api/catalogs/knowledge-center/courses/:id
pub async fn get_course_detail(Path(id): Path<String>) -> Result<Json<CourseDetail>, ApiError> {
    p101_course_detail::get_course_detail(&id)
        .map(Json)
        .ok_or_else(|| CatalogError::not_found("Course", id).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use contracts::shared::catalog::DetailSource;

    #[tokio::test]
    async fn test_hand_authored_blueprint() {
        let Json(detail) = get_blueprint_detail(Path(("solution-specs".into(), "ss-001".into())))
            .await
            .unwrap();
        assert_eq!(detail.source, DetailSource::HandAuthored);
    }

    #[tokio::test]
    async fn test_generated_build_detail_with_unknown_tab() {
        let Json(detail) = get_blueprint_detail(Path(("bogus".into(), "sb-002".into())))
            .await
            .unwrap();
        assert_eq!(detail.source, DetailSource::GeneratedFromBuild);
    }

    #[tokio::test]
    async fn test_missing_ids_are_404() {
        let err = get_blueprint_detail(Path(("solution-specs".into(), "does-not-exist".into())))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("does-not-exist"));

        let err = get_course_detail(Path("nope".into())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
