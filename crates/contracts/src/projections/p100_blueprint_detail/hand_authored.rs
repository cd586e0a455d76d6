use once_cell::sync::Lazy;

use super::dto::{ArchitectureLayer, BlueprintDetail, DeliveryPhase, DetailSource};
use crate::domain::strings;
use crate::shared::tabs::BlueprintTab;

static HAND_AUTHORED: Lazy<Vec<BlueprintDetail>> = Lazy::new(|| {
    vec![
        BlueprintDetail {
            id: "ss-001".into(),
            title: "API Gateway Modernisation".into(),
            tab: BlueprintTab::SolutionSpecs,
            source: DetailSource::HandAuthored,
            summary: "Replace brittle point-to-point links with a governed API layer that partners and internal teams can self-serve.".into(),
            overview: strings(&[
                "Most legacy estates expose dozens of bespoke integrations, each with its own authentication and error handling.",
                "The blueprint introduces a single gateway tier with consistent security, observability and lifecycle management.",
                "Teams publish APIs through a developer portal; consumers subscribe with keys issued by the identity provider.",
            ]),
            phases: vec![
                DeliveryPhase {
                    name: "Integration inventory".into(),
                    duration: "2 weeks".into(),
                    activities: strings(&[
                        "Catalogue existing interfaces and consumers",
                        "Rank interfaces by traffic and business criticality",
                    ]),
                },
                DeliveryPhase {
                    name: "Gateway foundation".into(),
                    duration: "3 weeks".into(),
                    activities: strings(&[
                        "Deploy the gateway cluster and identity integration",
                        "Define rate-limit and authentication policies",
                    ]),
                },
                DeliveryPhase {
                    name: "Migration waves".into(),
                    duration: "3 weeks".into(),
                    activities: strings(&[
                        "Route the first ten interfaces through the gateway",
                        "Decommission direct connections once traffic has moved",
                    ]),
                },
            ],
            layers: vec![
                ArchitectureLayer {
                    name: "Consumers".into(),
                    description: "Partner apps, internal web apps and batch jobs".into(),
                    components: strings(&["Developer portal", "API keys"]),
                },
                ArchitectureLayer {
                    name: "Gateway".into(),
                    description: "Routing, security and traffic policies".into(),
                    components: strings(&["Kong", "Keycloak"]),
                },
                ArchitectureLayer {
                    name: "Platform".into(),
                    description: "Container runtime and observability".into(),
                    components: strings(&["Kubernetes", "Metrics and tracing"]),
                },
            ],
            components: strings(&[
                "Gateway data plane",
                "Gateway control plane",
                "Identity provider",
                "Developer portal",
            ]),
            technologies: strings(&["Kong", "Kubernetes", "Keycloak"]),
            outcomes: strings(&[
                "One entry point and policy set for every published API",
                "Interface onboarding reduced from weeks to days",
            ]),
        },
    ]
});

/// Детальные записи, подготовленные вручную
pub fn hand_authored_details() -> &'static [BlueprintDetail] {
    &HAND_AUTHORED
}
