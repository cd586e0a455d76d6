//! Фасетный фильтр каталогов.
//!
//! Каждый тип записи каталога объявляет таблицу правил `(группа фасета, предикат)`.
//! Правила не обобщаются: одни группы сравнивают значение поля, другие проверяют
//! вхождение в список, третьи работают с флагом через метки "Yes"/"No" или с
//! количеством элементов. Внутри группы выбранные значения объединяются по ИЛИ,
//! между группами по И.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Ключи групп фасетов
pub mod groups {
    pub const CATEGORY: &str = "category";
    pub const TECHNICAL_COMPLEXITY: &str = "technicalComplexity";
    pub const MATURITY_LEVEL: &str = "maturityLevel";
    pub const TECHNOLOGIES: &str = "technologies";
    pub const INCLUDES_DIAGRAMS: &str = "includesDiagrams";
    pub const INCLUDES_COMPONENT_LIST: &str = "includesComponentList";
    pub const INCLUDES_AUTOMATION: &str = "includesAutomation";
    pub const DEPLOYMENT_MODEL: &str = "deploymentModel";
    pub const TEMPLATE_TYPE: &str = "templateType";
    pub const FILE_FORMAT: &str = "fileFormat";
    pub const LEVEL: &str = "level";
    pub const FORMAT: &str = "format";
    pub const TOPICS: &str = "topics";
    pub const DURATION: &str = "duration";
    pub const CERTIFICATION: &str = "certification";
    pub const DOMAIN: &str = "domain";
    pub const TAGS: &str = "tags";
}

pub const LABEL_YES: &str = "Yes";
pub const LABEL_NO: &str = "No";

pub const AUTOMATION_ALL: &str = "All";
pub const AUTOMATION_PARTIAL: &str = "Partial";
pub const AUTOMATION_NONE: &str = "None";

/// Минимальное число функций автоматизации для метки "All"
pub const AUTOMATION_ALL_MIN_FEATURES: usize = 3;

/// Ключи строки запроса, которые не являются фасетами
pub const RESERVED_QUERY_KEYS: [&str; 2] = ["tab", "q"];

/// Предикат группы: запись + выбранные значения группы (всегда непустое множество)
pub type FacetPredicate<T> = fn(&T, &BTreeSet<String>) -> bool;

/// Строка таблицы правил фильтрации
pub struct FacetRule<T: 'static> {
    pub group: &'static str,
    pub predicate: FacetPredicate<T>,
}

/// Тип записи, который умеет фильтроваться по фасетам
pub trait FacetRecord: Sized + 'static {
    /// Таблица правил, по одному на группу фасета
    fn facet_rules() -> &'static [FacetRule<Self>];

    /// Конфигурация фасетов для панели фильтров
    fn filter_config() -> FilterConfig;
}

/// Группа фасета с упорядоченным списком допустимых значений
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub key: String,
    pub label: String,
    pub options: Vec<String>,
}

impl FacetGroup {
    pub fn new<I, S>(key: &str, label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Группа с двумя значениями "Yes"/"No"
    pub fn yes_no(key: &str, label: &str) -> Self {
        Self::new(key, label, [LABEL_YES, LABEL_NO])
    }
}

/// Набор групп фасетов для одного каталога/вкладки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub groups: Vec<FacetGroup>,
}

impl FilterConfig {
    pub fn new(groups: Vec<FacetGroup>) -> Self {
        Self { groups }
    }

    pub fn group(&self, key: &str) -> Option<&FacetGroup> {
        self.groups.iter().find(|g| g.key == key)
    }
}

/// Выбранные пользователем значения фасетов (только состояние UI)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedFilters(BTreeMap<String, BTreeSet<String>>);

impl SelectedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Включить/выключить значение в группе. Пустые группы удаляются.
    pub fn toggle(&mut self, group: &str, value: &str) {
        let values = self.0.entry(group.to_string()).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.0.remove(group);
        }
    }

    pub fn set_group<I, S>(&mut self, group: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.0.remove(group);
        } else {
            self.0.insert(group.to_string(), values);
        }
    }

    pub fn clear_group(&mut self, group: &str) {
        self.0.remove(group);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_selected(&self, group: &str, value: &str) -> bool {
        self.0.get(group).is_some_and(|v| v.contains(value))
    }

    pub fn values(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.0.get(group)
    }

    /// Нет ни одной группы с выбранными значениями
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    /// Общее число выбранных значений во всех группах
    pub fn active_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Группы, которые реально ограничивают выборку
    pub fn active_groups(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(group, values)| (group.as_str(), values))
    }

    /// Разбор пар строки запроса `group=value`; `tab` и `q` пропускаются
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selected = Self::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref().trim(), value.as_ref().trim());
            if key.is_empty() || value.is_empty() || RESERVED_QUERY_KEYS.contains(&key) {
                continue;
            }
            selected
                .0
                .entry(key.to_string())
                .or_default()
                .insert(value.to_string());
        }
        selected
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.active_groups()
            .flat_map(|(group, values)| {
                values
                    .iter()
                    .map(move |value| (group.to_string(), value.clone()))
            })
            .collect()
    }
}

/// Проверка одной записи против всех активных групп.
///
/// Группа без строки в таблице правил пропускает все записи.
pub fn matches_filters<T: FacetRecord>(record: &T, selected: &SelectedFilters) -> bool {
    selected
        .active_groups()
        .all(|(group, values)| match find_rule::<T>(group) {
            Some(rule) => (rule.predicate)(record, values),
            None => true,
        })
}

/// Стабильная фильтрация: порядок исходного массива сохраняется
pub fn apply_filters<'a, T: FacetRecord>(records: &'a [T], selected: &SelectedFilters) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_filters(*record, selected))
        .collect()
}

pub fn find_rule<T: FacetRecord>(group: &str) -> Option<&'static FacetRule<T>> {
    T::facet_rules().iter().find(|rule| rule.group == group)
}

// ============================================================================
// Building blocks for per-group predicates
// ============================================================================

/// Значение поля входит в выбранные
pub fn label_in(label: &str, selected: &BTreeSet<String>) -> bool {
    selected.contains(label)
}

/// Хотя бы один элемент списка входит в выбранные
pub fn any_in(items: &[String], selected: &BTreeSet<String>) -> bool {
    items.iter().any(|item| selected.contains(item))
}

/// Булев флаг через метки "Yes"/"No".
///
/// Если не выбрана ни одна из двух меток, группа ничего не отсекает.
pub fn yes_no_flag(flag: bool, selected: &BTreeSet<String>) -> bool {
    let wants_yes = selected.contains(LABEL_YES);
    let wants_no = selected.contains(LABEL_NO);
    match (wants_yes, wants_no) {
        (true, true) => true,
        (true, false) => flag,
        (false, true) => !flag,
        (false, false) => true,
    }
}

/// Покрытие автоматизацией по количеству функций:
/// "All": не меньше трёх, "Partial": одна или две, "None": ни одной.
pub fn automation_coverage(feature_count: usize, selected: &BTreeSet<String>) -> bool {
    let mut recognised = selected
        .iter()
        .filter_map(|label| match label.as_str() {
            AUTOMATION_ALL => Some(feature_count >= AUTOMATION_ALL_MIN_FEATURES),
            AUTOMATION_PARTIAL => {
                Some((1..AUTOMATION_ALL_MIN_FEATURES).contains(&feature_count))
            }
            AUTOMATION_NONE => Some(feature_count == 0),
            _ => None,
        })
        .peekable();

    if recognised.peek().is_none() {
        return true;
    }
    recognised.any(|hit| hit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: u32,
        kind: &'static str,
    }

    fn by_kind(row: &Row, selected: &BTreeSet<String>) -> bool {
        label_in(row.kind, selected)
    }

    static ROW_RULES: &[FacetRule<Row>] = &[FacetRule {
        group: "kind",
        predicate: by_kind,
    }];

    impl FacetRecord for Row {
        fn facet_rules() -> &'static [FacetRule<Self>] {
            ROW_RULES
        }

        fn filter_config() -> FilterConfig {
            FilterConfig::new(vec![FacetGroup::new("kind", "Kind", ["a", "b"])])
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, kind: "a" },
            Row { id: 2, kind: "b" },
            Row { id: 3, kind: "a" },
        ]
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let data = rows();
        let result = apply_filters(&data, &SelectedFilters::new());
        assert_eq!(result.len(), data.len());
        assert!(result.iter().zip(data.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_unknown_group_passes_everything() {
        let data = rows();
        let mut selected = SelectedFilters::new();
        selected.toggle("colour", "red");
        assert_eq!(apply_filters(&data, &selected).len(), 3);
    }

    #[test]
    fn test_filter_keeps_original_order() {
        let data = rows();
        let mut selected = SelectedFilters::new();
        selected.toggle("kind", "a");
        let ids: Vec<u32> = apply_filters(&data, &selected).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_toggle_twice_removes_group() {
        let mut selected = SelectedFilters::new();
        selected.toggle("kind", "a");
        assert_eq!(selected.active_count(), 1);
        selected.toggle("kind", "a");
        assert!(selected.is_empty());
        assert!(selected.values("kind").is_none());
    }

    #[test]
    fn test_query_pairs_skip_reserved_keys() {
        let selected = SelectedFilters::from_query_pairs([
            ("tab", "solution-builds"),
            ("q", "kong"),
            ("maturityLevel", "Pilot"),
            ("maturityLevel", "Production"),
            ("category", ""),
        ]);
        assert_eq!(selected.active_count(), 2);
        assert!(selected.is_selected("maturityLevel", "Pilot"));
        assert_eq!(
            selected.to_query_pairs(),
            vec![
                ("maturityLevel".to_string(), "Pilot".to_string()),
                ("maturityLevel".to_string(), "Production".to_string()),
            ]
        );
    }

    #[test]
    fn test_yes_no_flag() {
        assert!(yes_no_flag(true, &set(&["Yes"])));
        assert!(!yes_no_flag(false, &set(&["Yes"])));
        assert!(yes_no_flag(false, &set(&["No"])));
        assert!(!yes_no_flag(true, &set(&["No"])));
        assert!(yes_no_flag(false, &set(&["Yes", "No"])));
        // ни одной знакомой метки, группа не фильтрует
        assert!(yes_no_flag(false, &set(&["Maybe"])));
    }

    #[test]
    fn test_automation_coverage() {
        assert!(automation_coverage(3, &set(&["All"])));
        assert!(automation_coverage(5, &set(&["All"])));
        assert!(!automation_coverage(2, &set(&["All"])));
        assert!(automation_coverage(2, &set(&["Partial"])));
        assert!(!automation_coverage(0, &set(&["Partial"])));
        assert!(automation_coverage(0, &set(&["None"])));
        assert!(automation_coverage(0, &set(&["All", "None"])));
        assert!(automation_coverage(1, &set(&["Unknown"])));
    }
}
