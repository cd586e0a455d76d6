//! Текстовый поиск по каталогам (case-insensitive, подстрока)

use super::filter::{matches_filters, FacetRecord, SelectedFilters};

/// Trait для записей, поддерживающих текстовый поиск
pub trait Searchable {
    /// Поля, по которым ищется подстрока: название, описание, технологии/теги
    fn search_fields(&self) -> Vec<&str>;
}

/// Нормализованный поисковый запрос; `None` означает "совпадает всё"
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Совпадает ли запись с запросом хотя бы в одном поле
pub fn matches_query<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    match normalize_query(query) {
        Some(needle) => matches_normalized(record, &needle),
        None => true,
    }
}

fn matches_normalized<T: Searchable + ?Sized>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Фасетный фильтр + текстовый поиск; порядок исходного массива сохраняется
pub fn filter_catalog<'a, T>(records: &'a [T], selected: &SelectedFilters, query: &str) -> Vec<&'a T>
where
    T: FacetRecord + Searchable,
{
    let needle = normalize_query(query);
    records
        .iter()
        .filter(|record| matches_filters(*record, selected))
        .filter(|record| match &needle {
            Some(needle) => matches_normalized(*record, needle),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card {
        title: String,
        description: String,
        technologies: Vec<String>,
    }

    impl Searchable for Card {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.title.as_str(), self.description.as_str()];
            fields.extend(self.technologies.iter().map(String::as_str));
            fields
        }
    }

    fn gateway() -> Card {
        Card {
            title: "API Gateway Modernisation".into(),
            description: "Front door for partner integrations".into(),
            technologies: vec!["Kong".into(), "Kubernetes".into()],
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let card = gateway();
        assert!(matches_query(&card, "KONG"));
        assert_eq!(matches_query(&card, "KONG"), matches_query(&card, "kong"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let card = gateway();
        assert!(matches_query(&card, ""));
        assert!(matches_query(&card, "   \t"));
    }

    #[test]
    fn test_matches_any_field() {
        let card = gateway();
        assert!(matches_query(&card, "modernis"));
        assert!(matches_query(&card, "partner"));
        assert!(matches_query(&card, "  kubernetes "));
        assert!(!matches_query(&card, "terraform"));
    }
}
