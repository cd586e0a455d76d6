use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::enums::MaturityLevel;
use crate::shared::catalog::CatalogItem;
use crate::shared::filter::{
    any_in, groups, label_in, FacetGroup, FacetRecord, FacetRule, FilterConfig,
};
use crate::shared::search::Searchable;

/// Best practice (вкладка `best-practices` в Knowledge Center)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPractice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub maturity_level: MaturityLevel,
    pub tags: Vec<String>,
}

pub const PRACTICE_DOMAINS: [&str; 4] = ["Governance", "Delivery", "Data", "Architecture"];

pub const PRACTICE_TAGS: [&str; 6] = [
    "Agile",
    "OKR",
    "Data Quality",
    "API",
    "Portfolio",
    "Architecture Review",
];

impl CatalogItem for BestPractice {
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
        vec![self.domain.clone(), self.maturity_level.label().to_string()]
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for BestPractice {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

fn by_domain(practice: &BestPractice, selected: &BTreeSet<String>) -> bool {
    label_in(&practice.domain, selected)
}

fn by_maturity(practice: &BestPractice, selected: &BTreeSet<String>) -> bool {
    label_in(practice.maturity_level.label(), selected)
}

fn by_tags(practice: &BestPractice, selected: &BTreeSet<String>) -> bool {
    any_in(&practice.tags, selected)
}

static BEST_PRACTICE_RULES: &[FacetRule<BestPractice>] = &[
    FacetRule { group: groups::DOMAIN, predicate: by_domain },
    FacetRule { group: groups::MATURITY_LEVEL, predicate: by_maturity },
    FacetRule { group: groups::TAGS, predicate: by_tags },
];

impl FacetRecord for BestPractice {
    fn facet_rules() -> &'static [FacetRule<Self>] {
        BEST_PRACTICE_RULES
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new(vec![
            FacetGroup::new(groups::DOMAIN, "Domain", PRACTICE_DOMAINS),
            FacetGroup::new(
                groups::MATURITY_LEVEL,
                "Maturity Level",
                MaturityLevel::all().iter().map(|m| m.label()),
            ),
            FacetGroup::new(groups::TAGS, "Tags", PRACTICE_TAGS),
        ])
    }
}
