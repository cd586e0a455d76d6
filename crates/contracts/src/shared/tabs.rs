//! Вкладки каталогов и состояние страницы списка.
//!
//! Активная вкладка хранится в строке запроса (`?tab=`). Неизвестное или
//! пустое значение даёт вкладку по умолчанию. Переключение вкладки сбрасывает
//! выбранные фасеты: у разных вкладок разные схемы фильтров.

use super::filter::SelectedFilters;
use serde::{Deserialize, Serialize};

/// Конечный набор вкладок одной страницы
pub trait CatalogTab: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];

    fn code(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn default_tab() -> Self;

    /// Строгий разбор кода вкладки
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tab| tab.code() == code)
    }

    /// Разбор значения из URL с откатом на вкладку по умолчанию
    fn from_query(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .and_then(Self::from_code)
            .unwrap_or_else(Self::default_tab)
    }
}

/// Вкладки страницы Blueprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlueprintTab {
    SolutionSpecs,
    SolutionBuilds,
}

impl CatalogTab for BlueprintTab {
    fn all() -> &'static [Self] {
        &[BlueprintTab::SolutionSpecs, BlueprintTab::SolutionBuilds]
    }

    fn code(&self) -> &'static str {
        match self {
            BlueprintTab::SolutionSpecs => "solution-specs",
            BlueprintTab::SolutionBuilds => "solution-builds",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            BlueprintTab::SolutionSpecs => "Solution Specs",
            BlueprintTab::SolutionBuilds => "Solution Builds",
        }
    }

    fn default_tab() -> Self {
        BlueprintTab::SolutionSpecs
    }
}

/// Вкладки Knowledge Center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnowledgeCenterTab {
    Courses,
    BestPractices,
}

impl CatalogTab for KnowledgeCenterTab {
    fn all() -> &'static [Self] {
        &[KnowledgeCenterTab::Courses, KnowledgeCenterTab::BestPractices]
    }

    fn code(&self) -> &'static str {
        match self {
            KnowledgeCenterTab::Courses => "courses",
            KnowledgeCenterTab::BestPractices => "best-practices",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            KnowledgeCenterTab::Courses => "Courses",
            KnowledgeCenterTab::BestPractices => "Best Practices",
        }
    }

    fn default_tab() -> Self {
        KnowledgeCenterTab::Courses
    }
}

/// У каталога шаблонов одна вкладка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateTab {
    All,
}

impl CatalogTab for TemplateTab {
    fn all() -> &'static [Self] {
        &[TemplateTab::All]
    }

    fn code(&self) -> &'static str {
        "all"
    }

    fn title(&self) -> &'static str {
        "All Templates"
    }

    fn default_tab() -> Self {
        TemplateTab::All
    }
}

/// Что изменилось после переключения вкладки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSwitch {
    /// Вкладка уже активна, состояние не тронуто
    Unchanged,
    /// Вкладка сменилась: фасеты сброшены, прокрутку нужно вернуть наверх
    Switched,
}

/// Состояние страницы списка: вкладка, фасеты, запрос
#[derive(Debug, Clone, PartialEq)]
pub struct TabState<T: CatalogTab> {
    pub active: T,
    pub filters: SelectedFilters,
    pub query: String,
}

impl<T: CatalogTab> TabState<T> {
    pub fn new(active: T) -> Self {
        Self {
            active,
            filters: SelectedFilters::new(),
            query: String::new(),
        }
    }

    pub fn from_query(value: Option<&str>) -> Self {
        Self::new(T::from_query(value))
    }

    pub fn switch_to(&mut self, tab: T) -> TabSwitch {
        if self.active == tab {
            return TabSwitch::Unchanged;
        }
        self.active = tab;
        self.filters.clear();
        TabSwitch::Switched
    }

    /// Сброс фасетов и запроса ("Clear filters" в пустом состоянии)
    pub fn clear_all(&mut self) {
        self.filters.clear();
        self.query.clear();
    }

    pub fn has_active_criteria(&self) -> bool {
        !self.filters.is_empty() || !self.query.trim().is_empty()
    }
}

impl<T: CatalogTab> Default for TabState<T> {
    fn default() -> Self {
        Self::new(T::default_tab())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tab_falls_back_to_default() {
        assert_eq!(BlueprintTab::from_query(None), BlueprintTab::SolutionSpecs);
        assert_eq!(BlueprintTab::from_query(Some("")), BlueprintTab::SolutionSpecs);
        assert_eq!(BlueprintTab::from_query(Some("bogus")), BlueprintTab::SolutionSpecs);
        assert_eq!(
            BlueprintTab::from_query(Some("solution-builds")),
            BlueprintTab::SolutionBuilds
        );
        assert_eq!(
            KnowledgeCenterTab::from_query(Some("best-practices")),
            KnowledgeCenterTab::BestPractices
        );
    }

    #[test]
    fn test_tab_codes_are_unique() {
        let codes: Vec<&str> = BlueprintTab::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["solution-specs", "solution-builds"]);
        for tab in KnowledgeCenterTab::all() {
            assert_eq!(KnowledgeCenterTab::from_code(tab.code()), Some(*tab));
        }
    }

    #[test]
    fn test_switching_tab_resets_filters_but_keeps_query() {
        let mut state = TabState::<BlueprintTab>::default();
        state.filters.toggle("maturityLevel", "Pilot");
        state.query = "kong".into();

        assert_eq!(state.switch_to(BlueprintTab::SolutionSpecs), TabSwitch::Unchanged);
        assert_eq!(state.filters.active_count(), 1);

        assert_eq!(state.switch_to(BlueprintTab::SolutionBuilds), TabSwitch::Switched);
        assert!(state.filters.is_empty());
        assert_eq!(state.query, "kong");
        assert_eq!(state.active, BlueprintTab::SolutionBuilds);
    }

    #[test]
    fn test_clear_all() {
        let mut state = TabState::<KnowledgeCenterTab>::from_query(Some("best-practices"));
        state.filters.toggle("tags", "Agile");
        state.query = "scrum".into();
        assert!(state.has_active_criteria());
        state.clear_all();
        assert!(!state.has_active_criteria());
        assert_eq!(state.active, KnowledgeCenterTab::BestPractices);
    }
}
