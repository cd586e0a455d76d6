use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::enums::{Complexity, DeploymentModel, MaturityLevel};
use crate::shared::catalog::CatalogItem;
use crate::shared::filter::{
    any_in, automation_coverage, groups, label_in, FacetGroup, FacetRecord, FacetRule,
    FilterConfig, AUTOMATION_ALL, AUTOMATION_NONE, AUTOMATION_PARTIAL,
};
use crate::shared::search::Searchable;

/// Solution Build: готовая к развертыванию сборка решения (вкладка `solution-builds`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionBuild {
    pub id: String,
    pub title: String,
    pub description: String,
    pub complexity: Complexity,
    pub maturity_level: MaturityLevel,
    pub deployment_model: DeploymentModel,
    pub technologies: Vec<String>,
    /// Автоматизированные шаги сборки (CI/CD, тесты, провижининг …)
    pub automation_features: Vec<String>,
    pub setup_time_days: u32,
}

pub const BUILD_TECHNOLOGIES: [&str; 9] = [
    "Kong",
    "Kubernetes",
    "Helm",
    "Apache Kafka",
    "PostgreSQL",
    "Terraform",
    "GitHub Actions",
    "Azure",
    "AWS",
];

impl CatalogItem for SolutionBuild {
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
            self.deployment_model.label().to_string(),
            format!("{} complexity", self.complexity),
            format!("{} automations", self.automation_features.len()),
        ]
    }

    fn tags(&self) -> &[String] {
        &self.technologies
    }
}

impl Searchable for SolutionBuild {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

fn by_complexity(build: &SolutionBuild, selected: &BTreeSet<String>) -> bool {
    label_in(build.complexity.label(), selected)
}

fn by_maturity(build: &SolutionBuild, selected: &BTreeSet<String>) -> bool {
    label_in(build.maturity_level.label(), selected)
}

fn by_deployment(build: &SolutionBuild, selected: &BTreeSet<String>) -> bool {
    label_in(build.deployment_model.label(), selected)
}

fn by_technologies(build: &SolutionBuild, selected: &BTreeSet<String>) -> bool {
    any_in(&build.technologies, selected)
}

fn by_automation(build: &SolutionBuild, selected: &BTreeSet<String>) -> bool {
    automation_coverage(build.automation_features.len(), selected)
}

static SOLUTION_BUILD_RULES: &[FacetRule<SolutionBuild>] = &[
    FacetRule { group: groups::TECHNICAL_COMPLEXITY, predicate: by_complexity },
    FacetRule { group: groups::MATURITY_LEVEL, predicate: by_maturity },
    FacetRule { group: groups::DEPLOYMENT_MODEL, predicate: by_deployment },
    FacetRule { group: groups::TECHNOLOGIES, predicate: by_technologies },
    FacetRule { group: groups::INCLUDES_AUTOMATION, predicate: by_automation },
];

impl FacetRecord for SolutionBuild {
    fn facet_rules() -> &'static [FacetRule<Self>] {
        SOLUTION_BUILD_RULES
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new(vec![
            FacetGroup::new(
                groups::DEPLOYMENT_MODEL,
                "Deployment Model",
                DeploymentModel::all().iter().map(|d| d.label()),
            ),
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
            FacetGroup::new(groups::TECHNOLOGIES, "Technologies", BUILD_TECHNOLOGIES),
            FacetGroup::new(
                groups::INCLUDES_AUTOMATION,
                "Includes Automation",
                [AUTOMATION_ALL, AUTOMATION_PARTIAL, AUTOMATION_NONE],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strings;
    use crate::shared::filter::{apply_filters, SelectedFilters};

    fn build(id: &str, automations: &[&str]) -> SolutionBuild {
        SolutionBuild {
            id: id.into(),
            title: format!("Build {id}"),
            description: "Deployable package".into(),
            complexity: Complexity::Medium,
            maturity_level: MaturityLevel::Production,
            deployment_model: DeploymentModel::Cloud,
            technologies: strings(&["Terraform"]),
            automation_features: strings(automations),
            setup_time_days: 3,
        }
    }

    fn ids<'a>(result: &[&'a SolutionBuild]) -> Vec<&'a str> {
        result.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_automation_all_means_three_or_more() {
        let catalog = vec![
            build("none", &[]),
            build("two", &["CI", "Tests"]),
            build("three", &["CI", "Tests", "Provisioning"]),
            build("four", &["CI", "Tests", "Provisioning", "Rollback"]),
        ];
        let mut selected = SelectedFilters::new();
        selected.toggle(groups::INCLUDES_AUTOMATION, AUTOMATION_ALL);
        assert_eq!(ids(&apply_filters(&catalog, &selected)), vec!["three", "four"]);

        selected.toggle(groups::INCLUDES_AUTOMATION, AUTOMATION_NONE);
        assert_eq!(
            ids(&apply_filters(&catalog, &selected)),
            vec!["none", "three", "four"]
        );
    }

    #[test]
    fn test_automation_unrecognised_label_does_not_filter() {
        let catalog = vec![build("none", &[]), build("two", &["CI", "Tests"])];
        let mut selected = SelectedFilters::new();
        selected.toggle(groups::INCLUDES_AUTOMATION, "Some");
        assert_eq!(apply_filters(&catalog, &selected).len(), 2);
    }

    #[test]
    fn test_deployment_model_uses_display_label() {
        let mut on_prem = build("op", &[]);
        on_prem.deployment_model = DeploymentModel::OnPremise;
        let catalog = vec![build("cloud", &[]), on_prem];

        let mut selected = SelectedFilters::new();
        selected.toggle(groups::DEPLOYMENT_MODEL, "On-Premise");
        assert_eq!(ids(&apply_filters(&catalog, &selected)), vec!["op"]);
    }
}
