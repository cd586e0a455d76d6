//! Разбор строки запроса списков каталога: `?tab=…&q=…&<facet>=<value>…`

use contracts::shared::filter::SelectedFilters;
use contracts::shared::routes::{query_pairs, query_param};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub tab: Option<String>,
    pub q: String,
    pub filters: SelectedFilters,
}

impl CatalogQuery {
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default();
        Self {
            tab: query_param(raw, "tab"),
            q: query_param(raw, "q").unwrap_or_default(),
            filters: SelectedFilters::from_query_pairs(query_pairs(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let query = CatalogQuery::parse(Some(
            "tab=solution-builds&q=Kong&deploymentModel=Cloud&deploymentModel=Hybrid&includesAutomation=All",
        ));
        assert_eq!(query.tab.as_deref(), Some("solution-builds"));
        assert_eq!(query.q, "Kong");
        assert_eq!(query.filters.active_count(), 3);
        assert!(query.filters.is_selected("deploymentModel", "Hybrid"));
        assert!(query.filters.is_selected("includesAutomation", "All"));
    }

    #[test]
    fn test_missing_query_is_empty() {
        let query = CatalogQuery::parse(None);
        assert_eq!(query, CatalogQuery::default());
        assert!(query.filters.is_empty());
    }
}
