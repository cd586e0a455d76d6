//! Таблица маршрутов SPA: разбор `pathname` + `search` в `AppRoute` и обратно.
//!
//! Коды вкладок и идентификаторы карточек берутся из сегментов пути или из
//! строки запроса и дальше используются как ключи в статических каталогах.

use super::tabs::{BlueprintTab, CatalogTab, KnowledgeCenterTab};

pub const BLUEPRINTS_PATH: &str = "/marketplaces/blueprints";
pub const TEMPLATES_PATH: &str = "/marketplaces/templates";
pub const KNOWLEDGE_CENTER_PATH: &str = "/knowledge-center";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Blueprints { tab: BlueprintTab },
    BlueprintDetail { tab: BlueprintTab, blueprint_id: String },
    Templates,
    KnowledgeCenter { tab: KnowledgeCenterTab },
    CourseDetail { course_id: String },
    NotFound { path: String },
}

impl AppRoute {
    /// Разобрать путь и строку запроса (`search` с ведущим `?` или без)
    pub fn parse(path: &str, search: &str) -> Self {
        let tab_param = query_param(search, "tab");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppRoute::Home,
            ["marketplaces", "blueprints"] => AppRoute::Blueprints {
                tab: BlueprintTab::from_query(tab_param.as_deref()),
            },
            ["marketplaces", "blueprints", tab, blueprint_id] => AppRoute::BlueprintDetail {
                tab: BlueprintTab::from_query(Some(*tab)),
                blueprint_id: decode_segment(blueprint_id),
            },
            ["marketplaces", "templates"] => AppRoute::Templates,
            ["knowledge-center"] => AppRoute::KnowledgeCenter {
                tab: KnowledgeCenterTab::from_query(tab_param.as_deref()),
            },
            ["knowledge-center", "courses", course_id] => AppRoute::CourseDetail {
                course_id: decode_segment(course_id),
            },
            _ => AppRoute::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// URL для `history.pushState` и ссылок
    pub fn to_url(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Blueprints { tab } => format!("{}?tab={}", BLUEPRINTS_PATH, tab.code()),
            AppRoute::BlueprintDetail { tab, blueprint_id } => format!(
                "{}/{}/{}",
                BLUEPRINTS_PATH,
                tab.code(),
                urlencoding::encode(blueprint_id)
            ),
            AppRoute::Templates => TEMPLATES_PATH.to_string(),
            AppRoute::KnowledgeCenter { tab } => {
                format!("{}?tab={}", KNOWLEDGE_CENTER_PATH, tab.code())
            }
            AppRoute::CourseDetail { course_id } => format!(
                "{}/courses/{}",
                KNOWLEDGE_CENTER_PATH,
                urlencoding::encode(course_id)
            ),
            AppRoute::NotFound { path } => path.clone(),
        }
    }

    /// Ссылка "назад к списку" для детальных страниц и 404
    pub fn listing(&self) -> AppRoute {
        match self {
            AppRoute::BlueprintDetail { tab, .. } => AppRoute::Blueprints { tab: *tab },
            AppRoute::CourseDetail { .. } => AppRoute::KnowledgeCenter {
                tab: KnowledgeCenterTab::Courses,
            },
            AppRoute::NotFound { .. } => AppRoute::Blueprints {
                tab: BlueprintTab::default_tab(),
            },
            other => other.clone(),
        }
    }
}

/// Значение параметра из строки запроса (первое вхождение, URL-декодированное)
pub fn query_param(search: &str, key: &str) -> Option<String> {
    query_pairs(search)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Все пары `key=value` строки запроса в исходном порядке
pub fn query_pairs(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(|d| d.into_owned());
    decoded.unwrap_or(spaced)
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_routes() {
        assert_eq!(AppRoute::parse("/", ""), AppRoute::Home);
        assert_eq!(
            AppRoute::parse("/marketplaces/blueprints", "?tab=solution-builds"),
            AppRoute::Blueprints {
                tab: BlueprintTab::SolutionBuilds
            }
        );
        assert_eq!(
            AppRoute::parse("/marketplaces/blueprints/", "tab=nope"),
            AppRoute::Blueprints {
                tab: BlueprintTab::SolutionSpecs
            }
        );
        assert_eq!(
            AppRoute::parse("/knowledge-center", ""),
            AppRoute::KnowledgeCenter {
                tab: KnowledgeCenterTab::Courses
            }
        );
    }

    #[test]
    fn test_parse_detail_routes() {
        assert_eq!(
            AppRoute::parse("/marketplaces/blueprints/solution-builds/sb-002", ""),
            AppRoute::BlueprintDetail {
                tab: BlueprintTab::SolutionBuilds,
                blueprint_id: "sb-002".into()
            }
        );
        // неизвестная вкладка в пути откатывается на вкладку по умолчанию
        assert_eq!(
            AppRoute::parse("/marketplaces/blueprints/whatever/ss-001", ""),
            AppRoute::BlueprintDetail {
                tab: BlueprintTab::SolutionSpecs,
                blueprint_id: "ss-001".into()
            }
        );
        assert_eq!(
            AppRoute::parse("/knowledge-center/courses/crs-003", ""),
            AppRoute::CourseDetail {
                course_id: "crs-003".into()
            }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            AppRoute::parse("/marketplaces/unknown", ""),
            AppRoute::NotFound {
                path: "/marketplaces/unknown".into()
            }
        );
    }

    #[test]
    fn test_url_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Blueprints {
                tab: BlueprintTab::SolutionBuilds,
            },
            AppRoute::BlueprintDetail {
                tab: BlueprintTab::SolutionSpecs,
                blueprint_id: "ss-001".into(),
            },
            AppRoute::Templates,
            AppRoute::KnowledgeCenter {
                tab: KnowledgeCenterTab::BestPractices,
            },
            AppRoute::CourseDetail {
                course_id: "crs-001".into(),
            },
        ];
        for route in routes {
            let url = route.to_url();
            let (path, search) = url.split_once('?').unwrap_or((url.as_str(), ""));
            assert_eq!(AppRoute::parse(path, search), route, "url: {url}");
        }
    }

    #[test]
    fn test_query_pairs_decode() {
        let pairs = query_pairs("?q=api+gateway&technologies=Apache%20Kafka&flag");
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "api gateway".to_string()),
                ("technologies".to_string(), "Apache Kafka".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
        assert_eq!(query_param("tab=courses", "tab").as_deref(), Some("courses"));
        assert_eq!(query_param("", "tab"), None);
    }

    #[test]
    fn test_malformed_escape_keeps_raw_text() {
        let pairs = query_pairs("q=kong+%FF&tab=courses");
        assert_eq!(pairs[0], ("q".to_string(), "kong %FF".to_string()));
        assert_eq!(query_param("q=%E0%A4%A", "q").as_deref(), Some("%E0%A4%A"));
    }
}
