use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::enums::TemplateType;
use crate::shared::catalog::CatalogItem;
use crate::shared::filter::{groups, label_in, FacetGroup, FacetRecord, FacetRule, FilterConfig};
use crate::shared::search::Searchable;

/// Шаблон документа для скачивания/запроса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub template_type: TemplateType,
    pub category: String,
    /// DOCX, XLSX, PPTX, PBIX
    pub file_format: String,
    pub tags: Vec<String>,
    pub downloads: u32,
}

pub const TEMPLATE_CATEGORIES: [&str; 4] = ["Strategy", "Governance", "Delivery", "Reporting"];

pub const TEMPLATE_FILE_FORMATS: [&str; 4] = ["DOCX", "XLSX", "PPTX", "PBIX"];

impl CatalogItem for Template {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn badges(&self) -> Vec<String> {
        vec![
            self.template_type.label().to_string(),
            self.file_format.clone(),
            format!("{} downloads", self.downloads),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Template {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

fn by_type(template: &Template, selected: &BTreeSet<String>) -> bool {
    label_in(template.template_type.label(), selected)
}

fn by_category(template: &Template, selected: &BTreeSet<String>) -> bool {
    label_in(&template.category, selected)
}

fn by_file_format(template: &Template, selected: &BTreeSet<String>) -> bool {
    label_in(&template.file_format, selected)
}

static TEMPLATE_RULES: &[FacetRule<Template>] = &[
    FacetRule { group: groups::TEMPLATE_TYPE, predicate: by_type },
    FacetRule { group: groups::CATEGORY, predicate: by_category },
    FacetRule { group: groups::FILE_FORMAT, predicate: by_file_format },
];

impl FacetRecord for Template {
    fn facet_rules() -> &'static [FacetRule<Self>] {
        TEMPLATE_RULES
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new(vec![
            FacetGroup::new(
                groups::TEMPLATE_TYPE,
                "Template Type",
                TemplateType::all().iter().map(|t| t.label()),
            ),
            FacetGroup::new(groups::CATEGORY, "Category", TEMPLATE_CATEGORIES),
            FacetGroup::new(groups::FILE_FORMAT, "File Format", TEMPLATE_FILE_FORMATS),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_template::templates;
    use crate::shared::filter::{apply_filters, SelectedFilters};
    use crate::shared::search::filter_catalog;

    #[test]
    fn test_or_within_group() {
        let mut selected = SelectedFilters::new();
        selected.toggle(groups::FILE_FORMAT, "DOCX");
        selected.toggle(groups::FILE_FORMAT, "PPTX");
        let result = apply_filters(templates(), &selected);
        assert!(!result.is_empty());
        assert!(result
            .iter()
            .all(|t| t.file_format == "DOCX" || t.file_format == "PPTX"));
        let expected = templates()
            .iter()
            .filter(|t| t.file_format == "DOCX" || t.file_format == "PPTX")
            .count();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn test_search_matches_tags() {
        let result = filter_catalog(templates(), &SelectedFilters::new(), "RACI");
        assert!(result.iter().any(|t| t.tags.iter().any(|tag| tag == "RACI")));
    }
}
