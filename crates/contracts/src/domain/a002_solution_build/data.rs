use once_cell::sync::Lazy;

use super::aggregate::SolutionBuild;
use crate::domain::strings;
use crate::enums::{Complexity, DeploymentModel, MaturityLevel};

static SOLUTION_BUILDS: Lazy<Vec<SolutionBuild>> = Lazy::new(|| {
    vec![
        SolutionBuild {
            id: "sb-001".into(),
            title: "Managed API Gateway Stack".into(),
            description: "Helm-packaged gateway cluster with declarative route config, OIDC plugin and a GitOps pipeline.".into(),
            complexity: Complexity::Medium,
            maturity_level: MaturityLevel::Production,
            deployment_model: DeploymentModel::Cloud,
            technologies: strings(&["Kong", "Kubernetes", "Helm", "GitHub Actions"]),
            automation_features: strings(&["CI/CD pipeline", "Config drift detection", "Automated smoke tests"]),
            setup_time_days: 5,
        },
        SolutionBuild {
            id: "sb-002".into(),
            title: "Streaming Platform Starter".into(),
            description: "Three-broker streaming cluster with schema registry, topic provisioning and consumer-lag alerts.".into(),
            complexity: Complexity::High,
            maturity_level: MaturityLevel::Pilot,
            deployment_model: DeploymentModel::Hybrid,
            technologies: strings(&["Apache Kafka", "Kubernetes", "Terraform"]),
            automation_features: strings(&["Topic provisioning", "Lag alerting"]),
            setup_time_days: 12,
        },
        SolutionBuild {
            id: "sb-003".into(),
            title: "Operational Database Baseline".into(),
            description: "Highly available relational database with backups, point-in-time recovery and connection pooling.".into(),
            complexity: Complexity::Low,
            maturity_level: MaturityLevel::Scaled,
            deployment_model: DeploymentModel::OnPremise,
            technologies: strings(&["PostgreSQL"]),
            automation_features: Vec::new(),
            setup_time_days: 3,
        },
        SolutionBuild {
            id: "sb-004".into(),
            title: "Cloud Landing Zone Accelerator".into(),
            description: "Multi-account landing zone with network hub, guardrail policies and cost tagging baked in.".into(),
            complexity: Complexity::High,
            maturity_level: MaturityLevel::Production,
            deployment_model: DeploymentModel::Cloud,
            technologies: strings(&["Terraform", "AWS", "GitHub Actions"]),
            automation_features: strings(&["Account vending", "Policy as code", "CI/CD pipeline", "Cost reports"]),
            setup_time_days: 15,
        },
        SolutionBuild {
            id: "sb-005".into(),
            title: "Hybrid Integration Runtime".into(),
            description: "Self-hosted integration runtime bridging on-premise systems to cloud workflows.".into(),
            complexity: Complexity::Medium,
            maturity_level: MaturityLevel::Concept,
            deployment_model: DeploymentModel::Hybrid,
            technologies: strings(&["Azure", "Kubernetes"]),
            automation_features: strings(&["Agent auto-update"]),
            setup_time_days: 7,
        },
        SolutionBuild {
            id: "sb-006".into(),
            title: "Analytics Sandbox".into(),
            description: "Disposable analytics workspace with sample datasets and notebook environment.".into(),
            complexity: Complexity::Low,
            maturity_level: MaturityLevel::Pilot,
            deployment_model: DeploymentModel::Cloud,
            technologies: strings(&["Azure", "PostgreSQL"]),
            automation_features: strings(&["Nightly teardown", "Dataset refresh", "Access provisioning"]),
            setup_time_days: 1,
        },
    ]
});

/// Статический каталог Solution Builds
pub fn solution_builds() -> &'static [SolutionBuild] {
    &SOLUTION_BUILDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::duplicate_ids;

    #[test]
    fn test_ids_are_unique() {
        assert!(duplicate_ids(solution_builds()).is_empty());
    }
}
