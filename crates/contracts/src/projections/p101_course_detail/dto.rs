use serde::{Deserialize, Serialize};

use crate::shared::catalog::DetailSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub title: String,
    pub duration_hours: u32,
    pub lessons: Vec<String>,
}

/// Страница курса: программа, результаты, требования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub source: DetailSource,
    pub summary: String,
    pub modules: Vec<CourseModule>,
    pub outcomes: Vec<String>,
    pub prerequisites: Vec<String>,
    pub certification: Option<String>,
}
