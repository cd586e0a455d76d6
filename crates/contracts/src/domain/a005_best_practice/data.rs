use once_cell::sync::Lazy;

use super::aggregate::BestPractice;
use crate::domain::strings;
use crate::enums::MaturityLevel;

static BEST_PRACTICES: Lazy<Vec<BestPractice>> = Lazy::new(|| {
    vec![
        BestPractice {
            id: "bp-001".into(),
            title: "Outcome-Based Portfolio Funding".into(),
            description: "Fund persistent value streams against measurable outcomes instead of fixed-scope projects.".into(),
            domain: "Governance".into(),
            maturity_level: MaturityLevel::Production,
            tags: strings(&["Portfolio", "OKR"]),
        },
        BestPractice {
            id: "bp-002".into(),
            title: "Two-Week Delivery Cadence".into(),
            description: "Synchronise team sprints and demos to shorten feedback loops across dependent teams.".into(),
            domain: "Delivery".into(),
            maturity_level: MaturityLevel::Scaled,
            tags: strings(&["Agile"]),
        },
        BestPractice {
            id: "bp-003".into(),
            title: "Data Quality Scorecards".into(),
            description: "Publish completeness, timeliness and accuracy scores for every certified dataset.".into(),
            domain: "Data".into(),
            maturity_level: MaturityLevel::Pilot,
            tags: strings(&["Data Quality"]),
        },
        BestPractice {
            id: "bp-004".into(),
            title: "API-First Integration Contracts".into(),
            description: "Agree and version interface contracts before implementation starts on either side.".into(),
            domain: "Architecture".into(),
            maturity_level: MaturityLevel::Production,
            tags: strings(&["API", "Architecture Review"]),
        },
        BestPractice {
            id: "bp-005".into(),
            title: "Lightweight Architecture Review Board".into(),
            description: "Time-boxed design reviews with published decision records and clear escalation paths.".into(),
            domain: "Architecture".into(),
            maturity_level: MaturityLevel::Concept,
            tags: strings(&["Architecture Review", "Portfolio"]),
        },
    ]
});

/// Статический каталог best practices
pub fn best_practices() -> &'static [BestPractice] {
    &BEST_PRACTICES
}
