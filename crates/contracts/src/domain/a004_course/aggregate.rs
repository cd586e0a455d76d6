use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::enums::{CourseFormat, CourseLevel};
use crate::shared::catalog::CatalogItem;
use crate::shared::filter::{
    any_in, groups, label_in, yes_no_flag, FacetGroup, FacetRecord, FacetRule, FilterConfig,
};
use crate::shared::search::Searchable;

/// Курс Learning Center (вкладка `courses` в Knowledge Center)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub provider: String,
    pub level: CourseLevel,
    pub format: CourseFormat,
    pub duration_hours: u32,
    pub topics: Vec<String>,
    pub certification: bool,
}

pub const DURATION_UNDER_5: &str = "Under 5 hours";
pub const DURATION_5_TO_20: &str = "5-20 hours";
pub const DURATION_OVER_20: &str = "Over 20 hours";

pub const COURSE_TOPICS: [&str; 7] = [
    "Digital Strategy",
    "Agile",
    "Cloud",
    "Data",
    "AI",
    "Change Management",
    "Security",
];

impl Course {
    /// Корзина длительности для фасета `duration`
    pub fn duration_bucket(&self) -> &'static str {
        match self.duration_hours {
            0..=4 => DURATION_UNDER_5,
            5..=20 => DURATION_5_TO_20,
            _ => DURATION_OVER_20,
        }
    }
}

impl CatalogItem for Course {
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
        let mut badges = vec![
            self.level.label().to_string(),
            self.format.label().to_string(),
            format!("{} h", self.duration_hours),
        ];
        if self.certification {
            badges.push("Certificate".to_string());
        }
        badges
    }

    fn tags(&self) -> &[String] {
        &self.topics
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.topics.iter().map(String::as_str));
        fields
    }
}

fn by_level(course: &Course, selected: &BTreeSet<String>) -> bool {
    label_in(course.level.label(), selected)
}

fn by_format(course: &Course, selected: &BTreeSet<String>) -> bool {
    label_in(course.format.label(), selected)
}

fn by_topics(course: &Course, selected: &BTreeSet<String>) -> bool {
    any_in(&course.topics, selected)
}

fn by_duration(course: &Course, selected: &BTreeSet<String>) -> bool {
    label_in(course.duration_bucket(), selected)
}

fn by_certification(course: &Course, selected: &BTreeSet<String>) -> bool {
    yes_no_flag(course.certification, selected)
}

static COURSE_RULES: &[FacetRule<Course>] = &[
    FacetRule { group: groups::LEVEL, predicate: by_level },
    FacetRule { group: groups::FORMAT, predicate: by_format },
    FacetRule { group: groups::TOPICS, predicate: by_topics },
    FacetRule { group: groups::DURATION, predicate: by_duration },
    FacetRule { group: groups::CERTIFICATION, predicate: by_certification },
];

impl FacetRecord for Course {
    fn facet_rules() -> &'static [FacetRule<Self>] {
        COURSE_RULES
    }

    fn filter_config() -> FilterConfig {
        FilterConfig::new(vec![
            FacetGroup::new(
                groups::LEVEL,
                "Level",
                CourseLevel::all().iter().map(|l| l.label()),
            ),
            FacetGroup::new(
                groups::FORMAT,
                "Format",
                CourseFormat::all().iter().map(|f| f.label()),
            ),
            FacetGroup::new(groups::TOPICS, "Topics", COURSE_TOPICS),
            FacetGroup::new(
                groups::DURATION,
                "Duration",
                [DURATION_UNDER_5, DURATION_5_TO_20, DURATION_OVER_20],
            ),
            FacetGroup::yes_no(groups::CERTIFICATION, "Certification"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_course::courses;
    use crate::shared::filter::{apply_filters, SelectedFilters};

    #[test]
    fn test_duration_bucket_edges() {
        let mut course = courses()[0].clone();
        for (hours, bucket) in [
            (0, DURATION_UNDER_5),
            (4, DURATION_UNDER_5),
            (5, DURATION_5_TO_20),
            (20, DURATION_5_TO_20),
            (21, DURATION_OVER_20),
        ] {
            course.duration_hours = hours;
            assert_eq!(course.duration_bucket(), bucket, "{hours} h");
        }
    }

    #[test]
    fn test_certification_and_level() {
        let mut selected = SelectedFilters::new();
        selected.toggle(groups::CERTIFICATION, "Yes");
        selected.toggle(groups::LEVEL, "Advanced");
        let result = apply_filters(courses(), &selected);
        assert!(result
            .iter()
            .all(|c| c.certification && c.level == CourseLevel::Advanced));
        let expected = courses()
            .iter()
            .filter(|c| c.certification && c.level == CourseLevel::Advanced)
            .count();
        assert_eq!(result.len(), expected);
    }
}
