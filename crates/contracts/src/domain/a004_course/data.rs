use once_cell::sync::Lazy;

use super::aggregate::Course;
use crate::domain::strings;
use crate::enums::{CourseFormat, CourseLevel};

static COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
    vec![
        Course {
            id: "crs-001".into(),
            title: "Foundations of Digital Transformation".into(),
            description: "Vocabulary, value levers and operating-model shifts behind successful transformation programmes.".into(),
            provider: "DTMP Academy".into(),
            level: CourseLevel::Beginner,
            format: CourseFormat::SelfPaced,
            duration_hours: 4,
            topics: strings(&["Digital Strategy", "Change Management"]),
            certification: false,
        },
        Course {
            id: "crs-002".into(),
            title: "Scaling Agile Delivery".into(),
            description: "Plan, coordinate and govern multiple agile teams delivering a shared product roadmap.".into(),
            provider: "DTMP Academy".into(),
            level: CourseLevel::Intermediate,
            format: CourseFormat::InstructorLed,
            duration_hours: 16,
            topics: strings(&["Agile", "Change Management"]),
            certification: true,
        },
        Course {
            id: "crs-003".into(),
            title: "Cloud Architecture for Leaders".into(),
            description: "Cloud economics, landing zones and migration patterns explained for decision makers.".into(),
            provider: "Partner Network".into(),
            level: CourseLevel::Intermediate,
            format: CourseFormat::Blended,
            duration_hours: 12,
            topics: strings(&["Cloud", "Security"]),
            certification: false,
        },
        Course {
            id: "crs-004".into(),
            title: "Data Products and Governance".into(),
            description: "Design data products with clear ownership, quality contracts and discoverability.".into(),
            provider: "DTMP Academy".into(),
            level: CourseLevel::Advanced,
            format: CourseFormat::InstructorLed,
            duration_hours: 24,
            topics: strings(&["Data", "Digital Strategy"]),
            certification: true,
        },
        Course {
            id: "crs-005".into(),
            title: "Applied AI for Operations".into(),
            description: "Identify, prioritise and pilot AI use cases in service and back-office operations.".into(),
            provider: "Partner Network".into(),
            level: CourseLevel::Advanced,
            format: CourseFormat::SelfPaced,
            duration_hours: 30,
            topics: strings(&["AI", "Data"]),
            certification: true,
        },
        Course {
            id: "crs-006".into(),
            title: "Secure by Design Essentials".into(),
            description: "Threat modelling and secure delivery practices for product teams.".into(),
            provider: "DTMP Academy".into(),
            level: CourseLevel::Beginner,
            format: CourseFormat::Blended,
            duration_hours: 6,
            topics: strings(&["Security", "Agile"]),
            certification: false,
        },
    ]
});

/// Статический каталог курсов
pub fn courses() -> &'static [Course] {
    &COURSES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::duplicate_ids;

    #[test]
    fn test_ids_are_unique() {
        assert!(duplicate_ids(courses()).is_empty());
    }
}
