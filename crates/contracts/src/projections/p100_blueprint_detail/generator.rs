//! Генерация детальной карточки подстановкой полей базовой записи в
//! фиксированные шаблоны фаз, слоёв и компонентов. Чистые функции.

use super::dto::{ArchitectureLayer, BlueprintDetail, DeliveryPhase, DetailSource};
use crate::domain::a001_solution_spec::SolutionSpec;
use crate::domain::a002_solution_build::SolutionBuild;
use crate::shared::tabs::BlueprintTab;

/// Доли длительности по фазам: Discovery, Design, Build, Rollout (в сумме 100)
const SPEC_PHASE_SHARES: [(&str, u32); 4] =
    [("Discovery", 15), ("Design", 25), ("Build", 40), ("Rollout", 20)];

const BUILD_PHASES: [&str; 4] = ["Provision", "Configure", "Validate", "Handover"];

pub fn detail_from_spec(spec: &SolutionSpec) -> BlueprintDetail {
    let tech_list = join_or(&spec.technologies, "the selected platform");

    let overview = vec![
        spec.description.clone(),
        format!(
            "This {} blueprint targets {} complexity and is currently at the {} maturity stage.",
            spec.category.to_lowercase(),
            spec.complexity.label().to_lowercase(),
            spec.maturity_level.label().to_lowercase()
        ),
        format!(
            "Reference implementation is built on {} with an estimated delivery window of {} weeks.",
            tech_list, spec.estimated_weeks
        ),
    ];

    let phases = SPEC_PHASE_SHARES
        .iter()
        .map(|(name, share)| DeliveryPhase {
            name: name.to_string(),
            duration: weeks_label(phase_weeks(spec.estimated_weeks, *share)),
            activities: spec_phase_activities(name, spec),
        })
        .collect();

    let mut components: Vec<String> = spec
        .technologies
        .iter()
        .map(|t| format!("{} service", t))
        .collect();
    if spec.includes_component_list {
        components.push(format!("{} component inventory", spec.title));
    }
    if spec.includes_diagrams {
        components.push("Context, container and deployment diagrams".to_string());
    }

    BlueprintDetail {
        id: spec.id.clone(),
        title: spec.title.clone(),
        tab: BlueprintTab::SolutionSpecs,
        source: DetailSource::GeneratedFromSpec,
        summary: spec.description.clone(),
        overview,
        phases,
        layers: standard_layers(&spec.title, &spec.technologies),
        components,
        technologies: spec.technologies.clone(),
        outcomes: vec![
            format!("A validated target architecture for {}", spec.title),
            format!("Delivery plan sized for {} complexity", spec.complexity.label().to_lowercase()),
            "Documented integration and data ownership boundaries".to_string(),
        ],
    }
}

pub fn detail_from_build(build: &SolutionBuild) -> BlueprintDetail {
    let tech_list = join_or(&build.technologies, "the packaged stack");

    let overview = vec![
        build.description.clone(),
        format!(
            "Packaged for {} deployment and typically stood up in {} day(s).",
            build.deployment_model.label(),
            build.setup_time_days
        ),
        format!("Includes {} automated step(s) on top of {}.", build.automation_features.len(), tech_list),
    ];

    let phases = BUILD_PHASES
        .iter()
        .enumerate()
        .map(|(index, name)| DeliveryPhase {
            name: name.to_string(),
            duration: days_label(phase_days(build.setup_time_days, index)),
            activities: build_phase_activities(name, build),
        })
        .collect();

    let mut components: Vec<String> = build.technologies.clone();
    components.extend(build.automation_features.iter().map(|a| format!("{} (automated)", a)));

    BlueprintDetail {
        id: build.id.clone(),
        title: build.title.clone(),
        tab: BlueprintTab::SolutionBuilds,
        source: DetailSource::GeneratedFromBuild,
        summary: build.description.clone(),
        overview,
        phases,
        layers: standard_layers(&build.title, &build.technologies),
        components,
        technologies: build.technologies.clone(),
        outcomes: vec![
            format!("{} running in a {} environment", build.title, build.deployment_model.label()),
            "Operational runbook and handover checklist".to_string(),
        ],
    }
}

fn spec_phase_activities(phase: &str, spec: &SolutionSpec) -> Vec<String> {
    match phase {
        "Discovery" => vec![
            format!("Confirm business drivers for {}", spec.title),
            "Map current-state systems and owners".to_string(),
        ],
        "Design" => vec![
            format!("Detail the {} target architecture", spec.category),
            format!("Select configuration for {}", join_or(&spec.technologies, "core platforms")),
        ],
        "Build" => vec![
            "Implement integration and data flows".to_string(),
            "Automate environments and quality gates".to_string(),
        ],
        _ => vec![
            "Pilot with a first business unit".to_string(),
            "Scale out and hand over to operations".to_string(),
        ],
    }
}

fn build_phase_activities(phase: &str, build: &SolutionBuild) -> Vec<String> {
    match phase {
        "Provision" => vec![format!("Provision {} infrastructure", build.deployment_model.label())],
        "Configure" => vec![format!("Apply baseline configuration for {}", join_or(&build.technologies, "the stack"))],
        "Validate" => vec!["Run smoke and integration checks".to_string()],
        _ => vec!["Hand over runbook and access to the operating team".to_string()],
    }
}

fn standard_layers(title: &str, technologies: &[String]) -> Vec<ArchitectureLayer> {
    vec![
        ArchitectureLayer {
            name: "Experience".to_string(),
            description: format!("Channels and user journeys served by {}", title),
            components: vec!["Web portal".to_string(), "Mobile channel".to_string()],
        },
        ArchitectureLayer {
            name: "Integration".to_string(),
            description: "APIs, events and orchestration between systems".to_string(),
            components: technologies.iter().take(2).cloned().collect(),
        },
        ArchitectureLayer {
            name: "Data".to_string(),
            description: "Operational and analytical data stores".to_string(),
            components: technologies.iter().skip(2).cloned().collect(),
        },
        ArchitectureLayer {
            name: "Infrastructure".to_string(),
            description: "Hosting, networking and security controls".to_string(),
            components: vec!["Identity and access".to_string(), "Monitoring".to_string()],
        },
    ]
}

/// Доля от общего срока, не меньше одной недели
fn phase_weeks(total_weeks: u32, share_percent: u32) -> u32 {
    ((total_weeks * share_percent + 50) / 100).max(1)
}

/// Дни на фазу: остаток от деления достаётся первым фазам
fn phase_days(total_days: u32, index: usize) -> u32 {
    let phases = BUILD_PHASES.len() as u32;
    let base = total_days / phases;
    let extra = u32::from((index as u32) < total_days % phases);
    (base + extra).max(1)
}

fn weeks_label(weeks: u32) -> String {
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{} weeks", weeks)
    }
}

fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_solution_spec::solution_specs;
    use crate::domain::a002_solution_build::solution_builds;

    #[test]
    fn test_generation_is_deterministic() {
        let spec = &solution_specs()[1];
        assert_eq!(detail_from_spec(spec), detail_from_spec(spec));
        let build = &solution_builds()[1];
        assert_eq!(detail_from_build(build), detail_from_build(build));
    }

    #[test]
    fn test_spec_fields_are_substituted() {
        let spec = &solution_specs()[1];
        let detail = detail_from_spec(spec);
        assert_eq!(detail.id, spec.id);
        assert_eq!(detail.source, DetailSource::GeneratedFromSpec);
        assert_eq!(detail.phases.len(), 4);
        assert!(detail.overview[2].contains("Apache Kafka"));
        assert!(detail.overview[2].contains(&format!("{} weeks", spec.estimated_weeks)));
        assert!(detail.phases[0].activities[0].contains(&spec.title));
    }

    #[test]
    fn test_build_phase_days_cover_setup_time() {
        let build = solution_builds().iter().find(|b| b.setup_time_days >= 4).unwrap();
        let total: u32 = (0..BUILD_PHASES.len())
            .map(|i| phase_days(build.setup_time_days, i))
            .sum();
        assert_eq!(total, build.setup_time_days);
    }

    #[test]
    fn test_phase_weeks_never_zero() {
        assert_eq!(phase_weeks(1, 15), 1);
        assert_eq!(phase_weeks(20, 40), 8);
    }
}
