use serde::{Deserialize, Serialize};

pub use crate::shared::catalog::DetailSource;
use crate::shared::tabs::BlueprintTab;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPhase {
    pub name: String,
    pub duration: String,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureLayer {
    pub name: String,
    pub description: String,
    pub components: Vec<String>,
}

/// Развернутое содержимое страницы blueprint (вкладки Overview / Architecture / Delivery)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintDetail {
    pub id: String,
    pub title: String,
    pub tab: BlueprintTab,
    pub source: DetailSource,
    pub summary: String,
    pub overview: Vec<String>,
    pub phases: Vec<DeliveryPhase>,
    pub layers: Vec<ArchitectureLayer>,
    pub components: Vec<String>,
    pub technologies: Vec<String>,
    pub outcomes: Vec<String>,
}
