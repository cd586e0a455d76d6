use super::dto::{CourseDetail, CourseModule};
use crate::domain::a004_course::Course;
use crate::domain::strings;
use crate::enums::CourseLevel;
use crate::shared::catalog::DetailSource;

/// Программа строится по темам курса; часы делятся поровну, остаток уходит в первые модули
pub fn detail_from_course(course: &Course) -> CourseDetail {
    let topics: Vec<&str> = if course.topics.is_empty() {
        vec!["Core concepts"]
    } else {
        course.topics.iter().map(String::as_str).collect()
    };
    let count = topics.len() as u32;
    let base = course.duration_hours / count;
    let remainder = course.duration_hours % count;

    let modules = topics
        .iter()
        .enumerate()
        .map(|(index, topic)| CourseModule {
            title: format!("{}: {}", topic, module_suffix(course.level)),
            duration_hours: base + u32::from((index as u32) < remainder),
            lessons: vec![
                format!("Introduction to {}", topic),
                format!("{} in practice", topic),
                format!("Applying {} to your programme", topic),
            ],
        })
        .collect();

    CourseDetail {
        id: course.id.clone(),
        title: course.title.clone(),
        provider: course.provider.clone(),
        source: DetailSource::GeneratedFromCourse,
        summary: course.description.clone(),
        modules,
        outcomes: topics
            .iter()
            .map(|topic| format!("Apply {} practices at {} level", topic, course.level.label().to_lowercase()))
            .collect(),
        prerequisites: prerequisites_for(course.level),
        certification: course
            .certification
            .then(|| format!("{} certificate of completion", course.provider)),
    }
}

fn module_suffix(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Beginner => "fundamentals",
        CourseLevel::Intermediate => "applied techniques",
        CourseLevel::Advanced => "advanced patterns",
    }
}

fn prerequisites_for(level: CourseLevel) -> Vec<String> {
    match level {
        CourseLevel::Beginner => Vec::new(),
        CourseLevel::Intermediate => strings(&["Foundations of Digital Transformation or equivalent"]),
        CourseLevel::Advanced => strings(&[
            "Foundations of Digital Transformation or equivalent",
            "Hands-on experience in a delivery or architecture role",
        ]),
    }
}
