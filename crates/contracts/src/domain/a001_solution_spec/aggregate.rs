use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::enums::{Complexity, MaturityLevel};
use crate::shared::catalog::CatalogItem;
use crate::shared::filter::{
    any_in, groups, label_in, yes_no_flag, FacetGroup, FacetRecord, FacetRule, FilterConfig,
};
use crate::shared::search::Searchable;

/// Solution Spec: архитектурная спецификация решения (вкладка `solution-specs`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionSpec {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub complexity: Complexity,
    pub maturity_level: MaturityLevel,
    pub technologies: Vec<String>,
    pub includes_diagrams: bool,
    pub includes_component_list: bool,
    /// Оценка длительности внедрения в неделях
    pub estimated_weeks: u32,
}

pub const SPEC_CATEGORIES: [&str; 5] = [
    "Integration",
    "Data & Analytics",
    "Customer Experience",
    "Security",
    "Operations",
];

pub const SPEC_TECHNOLOGIES: [&str; 10] = [
    "Kong",
    "Kubernetes",
    "Apache Kafka",
    "PostgreSQL",
    "Snowflake",
    "Power BI",
    "Salesforce",
    "Keycloak",
    "Terraform",
    "Azure",
];

impl CatalogItem for SolutionSpec {
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
            self.category.clone(),
            format!("{} complexity", self.complexity),
            self.maturity_level.label().to_string(),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.technologies
    }
}

impl Searchable for SolutionSpec {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

// ============================================================================
// Facet rules
// ============================================================================

fn by_category(spec: &SolutionSpec, selected: &BTreeSet<String>) -> bool {
    label_in(&spec.category, selected)
}

fn by_complexity(spec: &SolutionSpec, selected: &BTreeSet<String>) -> bool {
    label_in(spec.complexity.label(), selected)
}

fn by_maturity(spec: &SolutionSpec, selected: &BTreeSet<String>) -> bool {
    label_in(spec.maturity_level.label(), selected)
}

fn by_technologies(spec: &SolutionSpec, selected: &BTreeSet<String>) -> bool {
    any_in(&spec.technologies, selected)
}

fn by_diagrams(spec: &SolutionSpec, selected: &BTreeSet<String>) -> bool {
    yes_no_flag(spec.includes_diagrams, selected)
}

fn by_component_list(spec: &SolutionSpec, selected: &BTreeSet<String>) -> bool {
    yes_no_flag(spec.includes_component_list, selected)
}

static SOLUTION_SPEC_RULES: &[FacetRule<SolutionSpec>] = &[
    FacetRule { group: groups::CATEGORY, predicate: by_category },
    FacetRule { group: groups::TECHNICAL_COMPLEXITY, predicate: by_complexity },
    FacetRule { group: groups::MATURITY_LEVEL, predicate: by_maturity },
    FacetRule { group: groups::TECHNOLOGIES, predicate: by_technologies },
    FacetRule { group: groups::INCLUDES_DIAGRAMS, predicate: by_diagrams },
    FacetRule { group: groups::INCLUDES_COMPONENT_LIST, predicate: by_component_list },
];

impl FacetRecord for SolutionSpec {
    fn facet_rules() -> &'static [FacetRule<Self>] {
        SOLUTION_SPEC_RULES
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new(vec![
            FacetGroup::new(groups::CATEGORY, "Category", SPEC_CATEGORIES),
            FacetGroup::new(
                groups::TECHNICAL_COMPLEXITY,
                "Technical Complexity",
                Complexity::all().iter().map(|c| c.label()),
            ),
            FacetGroup::new(
                groups::MATURITY_LEVEL,
                "Maturity Level",
                MaturityLevel::all().iter().map(|m| m.label()),
            ),
            FacetGroup::new(groups::TECHNOLOGIES, "Technologies", SPEC_TECHNOLOGIES),
            FacetGroup::yes_no(groups::INCLUDES_DIAGRAMS, "Includes Diagrams"),
            FacetGroup::yes_no(groups::INCLUDES_COMPONENT_LIST, "Includes Component List"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strings;
    use crate::shared::filter::{apply_filters, SelectedFilters};
    use crate::shared::search::{filter_catalog, matches_query};

    fn spec(id: &str, complexity: Complexity) -> SolutionSpec {
        SolutionSpec {
            id: id.into(),
            title: format!("Spec {id}"),
            description: "Reference architecture".into(),
            category: "Integration".into(),
            complexity,
            maturity_level: MaturityLevel::Pilot,
            technologies: strings(&["Kong", "Kubernetes"]),
            includes_diagrams: true,
            includes_component_list: false,
            estimated_weeks: 6,
        }
    }

    #[test]
    fn test_complexity_scenario_keeps_order() {
        let catalog = vec![
            spec("bp-1", Complexity::Low),
            spec("bp-2", Complexity::High),
            spec("bp-3", Complexity::High),
        ];
        let mut selected = SelectedFilters::new();
        selected.toggle(groups::TECHNICAL_COMPLEXITY, "High");

        let ids: Vec<&str> = apply_filters(&catalog, &selected)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["bp-2", "bp-3"]);
    }

    #[test]
    fn test_maturity_filter_has_no_false_positives_or_negatives() {
        let catalog = super::super::data::solution_specs();
        let mut selected = SelectedFilters::new();
        selected.toggle(groups::MATURITY_LEVEL, "Production");
        selected.toggle(groups::MATURITY_LEVEL, "Scaled");

        let result = apply_filters(catalog, &selected);
        let expected: Vec<&SolutionSpec> = catalog
            .iter()
            .filter(|s| {
                matches!(
                    s.maturity_level,
                    MaturityLevel::Production | MaturityLevel::Scaled
                )
            })
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(result, expected);
    }

    #[test]
    fn test_groups_are_and_combined() {
        let mut a = spec("a", Complexity::High);
        a.includes_diagrams = false;
        let b = spec("b", Complexity::High);
        let c = spec("c", Complexity::Low);
        let catalog = vec![a, b, c];

        let mut selected = SelectedFilters::new();
        selected.toggle(groups::TECHNICAL_COMPLEXITY, "High");
        selected.toggle(groups::INCLUDES_DIAGRAMS, "Yes");
        let ids: Vec<&str> = apply_filters(&catalog, &selected)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_component_list_no_sentinel() {
        let mut with_list = spec("with", Complexity::Low);
        with_list.includes_component_list = true;
        let without_list = spec("without", Complexity::Low);
        let catalog = vec![with_list, without_list];

        let mut selected = SelectedFilters::new();
        selected.toggle(groups::INCLUDES_COMPONENT_LIST, "No");
        let result = apply_filters(&catalog, &selected);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "without");
    }

    #[test]
    fn test_technology_search_and_facet() {
        let catalog = vec![spec("x", Complexity::Medium)];
        assert!(matches_query(&catalog[0], "KONG"));

        let mut selected = SelectedFilters::new();
        selected.toggle(groups::TECHNOLOGIES, "Snowflake");
        assert!(filter_catalog(&catalog, &selected, "kong").is_empty());

        selected.toggle(groups::TECHNOLOGIES, "Kubernetes");
        assert_eq!(filter_catalog(&catalog, &selected, "kong").len(), 1);
    }

    #[test]
    fn test_every_rule_has_a_config_group() {
        let config = SolutionSpec::filter_config();
        for rule in SolutionSpec::facet_rules() {
            assert!(config.group(rule.group).is_some(), "{}", rule.group);
        }
    }
}
