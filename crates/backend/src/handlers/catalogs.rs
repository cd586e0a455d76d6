use axum::extract::{Path, RawQuery};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use contracts::domain::a001_solution_spec::{solution_specs, SolutionSpec};
use contracts::domain::a002_solution_build::{solution_builds, SolutionBuild};
use contracts::domain::a003_template::{templates, Template};
use contracts::domain::a004_course::{courses, Course};
use contracts::domain::a005_best_practice::{best_practices, BestPractice};
use contracts::shared::catalog::CatalogKind;
use contracts::shared::filter::{FacetRecord, FilterConfig};
use contracts::shared::search::{filter_catalog, Searchable};
use contracts::shared::tabs::{BlueprintTab, CatalogTab, KnowledgeCenterTab, TemplateTab};

use crate::shared::api_error::ApiError;
use crate::shared::catalog_query::CatalogQuery;

/// Ответ списка: `total` это размер каталога вкладки до фильтрации
#[derive(Debug, Serialize)]
pub struct CatalogListResponse<T: 'static> {
    pub tab: &'static str,
    pub total: usize,
    pub items: Vec<&'static T>,
}

fn list_tab<T>(tab: &'static str, records: &'static [T], query: &CatalogQuery) -> Response
where
    T: FacetRecord + Searchable + Serialize,
{
    let items = filter_catalog(records, &query.filters, &query.q);
    tracing::debug!(
        "catalog tab '{}': {} of {} match (q='{}', facets={})",
        tab,
        items.len(),
        records.len(),
        query.q,
        query.filters.active_count()
    );
    Json(CatalogListResponse {
        tab,
        total: records.len(),
        items,
    })
    .into_response()
}

/// GET /api/catalogs/blueprints
pub async fn list_blueprints(RawQuery(raw): RawQuery) -> Response {
    let query = CatalogQuery::parse(raw.as_deref());
    match BlueprintTab::from_query(query.tab.as_deref()) {
        tab @ BlueprintTab::SolutionSpecs => list_tab(tab.code(), solution_specs(), &query),
        tab @ BlueprintTab::SolutionBuilds => list_tab(tab.code(), solution_builds(), &query),
    }
}

/// GET /api/catalogs/templates
pub async fn list_templates(RawQuery(raw): RawQuery) -> Response {
    let query = CatalogQuery::parse(raw.as_deref());
    list_tab(TemplateTab::default_tab().code(), templates(), &query)
}

/// GET /api/catalogs/knowledge-center
pub async fn list_knowledge_center(RawQuery(raw): RawQuery) -> Response {
    let query = CatalogQuery::parse(raw.as_deref());
    match KnowledgeCenterTab::from_query(query.tab.as_deref()) {
        tab @ KnowledgeCenterTab::Courses => list_tab(tab.code(), courses(), &query),
        tab @ KnowledgeCenterTab::BestPractices => list_tab(tab.code(), best_practices(), &query),
    }
}

/// GET /api/facets/:catalog
pub async fn get_facets(
    Path(catalog): Path<String>,
    RawQuery(raw): RawQuery,
) -> Result<Json<FilterConfig>, ApiError> {
    let kind = CatalogKind::from_code(&catalog)?;
    let query = CatalogQuery::parse(raw.as_deref());

    let config = match kind {
        CatalogKind::Blueprints => match BlueprintTab::from_query(query.tab.as_deref()) {
            BlueprintTab::SolutionSpecs => SolutionSpec::filter_config(),
            BlueprintTab::SolutionBuilds => SolutionBuild::filter_config(),
        },
        CatalogKind::Templates => Template::filter_config(),
        CatalogKind::KnowledgeCenter => match KnowledgeCenterTab::from_query(query.tab.as_deref()) {
            KnowledgeCenterTab::Courses => Course::filter_config(),
            KnowledgeCenterTab::BestPractices => BestPractice::filter_config(),
        },
    };

    Ok(Json(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn raw(query: &str) -> RawQuery {
        RawQuery(Some(query.to_string()))
    }

    #[tokio::test]
    async fn test_list_blueprints_defaults_to_specs() {
        let body = body_json(list_blueprints(RawQuery(None)).await).await;
        assert_eq!(body["tab"], "solution-specs");
        assert_eq!(body["total"], solution_specs().len());
        assert_eq!(body["items"].as_array().unwrap().len(), solution_specs().len());
    }

    #[tokio::test]
    async fn test_list_builds_with_facet_and_search() {
        let response = list_blueprints(raw("tab=solution-builds&deploymentModel=Cloud&q=gateway")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "sb-001");
        assert_eq!(items[0]["deploymentModel"], "Cloud");
    }

    #[tokio::test]
    async fn test_unknown_tab_falls_back() {
        let body = body_json(list_knowledge_center(raw("tab=webinars")).await).await;
        assert_eq!(body["tab"], "courses");
    }

    #[tokio::test]
    async fn test_facets_for_unknown_catalog_is_404() {
        let result = get_facets(Path("dashboards".to_string()), RawQuery(None)).await;
        let err = result.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_facets_follow_tab() {
        let Json(config) = get_facets(Path("blueprints".to_string()), raw("tab=solution-builds"))
            .await
            .unwrap();
        assert!(config.group("includesAutomation").is_some());
        assert!(config.group("includesDiagrams").is_none());
    }
}
