//! Общий интерфейс записей каталога и перечень каталогов приложения

use super::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Запись статического каталога (карточка в списке)
pub trait CatalogItem {
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Короткие метки для карточки (сложность, зрелость, формат и т.п.)
    fn badges(&self) -> Vec<String>;

    /// Технологии или теги
    fn tags(&self) -> &[String];
}

/// Найти запись по идентификатору
pub fn find_by_id<'a, T: CatalogItem>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Идентификаторы, встречающиеся в каталоге больше одного раза
pub fn duplicate_ids<T: CatalogItem>(records: &[T]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut duplicates = Vec::new();
    for record in records {
        if !seen.insert(record.id()) && !duplicates.iter().any(|d| d == record.id()) {
            duplicates.push(record.id().to_string());
        }
    }
    duplicates
}

/// Откуда взялась детальная запись
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailSource {
    HandAuthored,
    GeneratedFromSpec,
    GeneratedFromBuild,
    GeneratedFromCourse,
}

/// Каталоги (страницы со списками)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    Blueprints,
    Templates,
    KnowledgeCenter,
}

impl CatalogKind {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogKind::Blueprints => "blueprints",
            CatalogKind::Templates => "templates",
            CatalogKind::KnowledgeCenter => "knowledge-center",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogKind::Blueprints => "Blueprints",
            CatalogKind::Templates => "Templates",
            CatalogKind::KnowledgeCenter => "Knowledge Center",
        }
    }

    pub fn all() -> Vec<CatalogKind> {
        vec![
            CatalogKind::Blueprints,
            CatalogKind::Templates,
            CatalogKind::KnowledgeCenter,
        ]
    }

    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        Self::all()
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| CatalogError::UnknownCatalog(code.to_string()))
    }
}
