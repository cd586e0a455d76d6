use once_cell::sync::Lazy;

use super::aggregate::SolutionSpec;
use crate::domain::strings;
use crate::enums::{Complexity, MaturityLevel};

static SOLUTION_SPECS: Lazy<Vec<SolutionSpec>> = Lazy::new(|| {
    vec![
        SolutionSpec {
            id: "ss-001".into(),
            title: "API Gateway Modernisation".into(),
            description: "Consolidate point-to-point integrations behind a managed API gateway with rate limiting, auth offload and a developer portal.".into(),
            category: "Integration".into(),
            complexity: Complexity::Medium,
            maturity_level: MaturityLevel::Production,
            technologies: strings(&["Kong", "Kubernetes", "Keycloak"]),
            includes_diagrams: true,
            includes_component_list: true,
            estimated_weeks: 8,
        },
        SolutionSpec {
            id: "ss-002".into(),
            title: "Event-Driven Order Backbone".into(),
            description: "Publish order lifecycle events to a streaming platform so fulfilment, billing and analytics subscribe instead of polling.".into(),
            category: "Integration".into(),
            complexity: Complexity::High,
            maturity_level: MaturityLevel::Pilot,
            technologies: strings(&["Apache Kafka", "Kubernetes", "PostgreSQL"]),
            includes_diagrams: true,
            includes_component_list: false,
            estimated_weeks: 14,
        },
        SolutionSpec {
            id: "ss-003".into(),
            title: "Enterprise Data Lakehouse".into(),
            description: "Land operational data in a governed lakehouse with curated marts for finance and operations reporting.".into(),
            category: "Data & Analytics".into(),
            complexity: Complexity::High,
            maturity_level: MaturityLevel::Scaled,
            technologies: strings(&["Snowflake", "Terraform", "Power BI"]),
            includes_diagrams: true,
            includes_component_list: true,
            estimated_weeks: 20,
        },
        SolutionSpec {
            id: "ss-004".into(),
            title: "Self-Service KPI Dashboards".into(),
            description: "Standard KPI catalogue and certified datasets that business units can slice without analyst involvement.".into(),
            category: "Data & Analytics".into(),
            complexity: Complexity::Low,
            maturity_level: MaturityLevel::Production,
            technologies: strings(&["Power BI", "Azure"]),
            includes_diagrams: false,
            includes_component_list: true,
            estimated_weeks: 4,
        },
        SolutionSpec {
            id: "ss-005".into(),
            title: "Customer 360 Profile".into(),
            description: "Unify CRM, support and web interactions into a single customer profile exposed to sales and service channels.".into(),
            category: "Customer Experience".into(),
            complexity: Complexity::High,
            maturity_level: MaturityLevel::Pilot,
            technologies: strings(&["Salesforce", "Apache Kafka", "Snowflake"]),
            includes_diagrams: true,
            includes_component_list: false,
            estimated_weeks: 16,
        },
        SolutionSpec {
            id: "ss-006".into(),
            title: "Zero-Trust Access Layer".into(),
            description: "Identity-aware access for internal applications with single sign-on, MFA and per-request policy evaluation.".into(),
            category: "Security".into(),
            complexity: Complexity::Medium,
            maturity_level: MaturityLevel::Concept,
            technologies: strings(&["Keycloak", "Kong", "Azure"]),
            includes_diagrams: false,
            includes_component_list: false,
            estimated_weeks: 10,
        },
        SolutionSpec {
            id: "ss-007".into(),
            title: "Infrastructure as Code Landing Zone".into(),
            description: "Repeatable cloud landing zone with network segmentation, policy guardrails and tagging standards.".into(),
            category: "Operations".into(),
            complexity: Complexity::Medium,
            maturity_level: MaturityLevel::Scaled,
            technologies: strings(&["Terraform", "Azure", "Kubernetes"]),
            includes_diagrams: true,
            includes_component_list: true,
            estimated_weeks: 6,
        },
        SolutionSpec {
            id: "ss-008".into(),
            title: "Digital Service Desk".into(),
            description: "Omnichannel service desk with knowledge suggestions and automated ticket routing.".into(),
            category: "Customer Experience".into(),
            complexity: Complexity::Low,
            maturity_level: MaturityLevel::Concept,
            technologies: strings(&["Salesforce"]),
            includes_diagrams: false,
            includes_component_list: true,
            estimated_weeks: 5,
        },
    ]
});

/// Статический каталог Solution Specs
pub fn solution_specs() -> &'static [SolutionSpec] {
    &SOLUTION_SPECS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::duplicate_ids;

    #[test]
    fn test_ids_are_unique() {
        assert!(duplicate_ids(solution_specs()).is_empty());
    }
}
