use super::dto::CourseDetail;
use super::generator::detail_from_course;
use super::hand_authored::hand_authored_details;
use crate::domain::a004_course::{courses, Course};
use crate::shared::catalog::find_by_id;

pub fn get_course_detail(id: &str) -> Option<CourseDetail> {
    resolve_course_detail(id, hand_authored_details(), courses())
}

/// Ручная запись → генерация из курса → `None`
pub fn resolve_course_detail(
    id: &str,
    hand_authored: &[CourseDetail],
    catalog: &[Course],
) -> Option<CourseDetail> {
    hand_authored
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .or_else(|| find_by_id(catalog, id).map(detail_from_course))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::DetailSource;

    #[test]
    fn test_hand_authored_course_wins() {
        let detail = get_course_detail("crs-001").unwrap();
        assert_eq!(detail.source, DetailSource::HandAuthored);
        assert_eq!(detail.modules.len(), 3);
    }

    #[test]
    fn test_generated_when_not_hand_authored() {
        let detail = get_course_detail("crs-004").unwrap();
        assert_eq!(detail.source, DetailSource::GeneratedFromCourse);
    }

    #[test]
    fn test_resolution_uses_given_tables() {
        assert!(resolve_course_detail("crs-001", &[], &[]).is_none());
        let generated = resolve_course_detail("crs-001", &[], courses()).unwrap();
        assert_eq!(generated.source, DetailSource::GeneratedFromCourse);
    }

    #[test]
    fn test_unknown_course_is_none() {
        assert!(get_course_detail("does-not-exist").is_none());
    }
}
