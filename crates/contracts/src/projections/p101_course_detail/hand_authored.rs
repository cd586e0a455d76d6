use once_cell::sync::Lazy;

use super::dto::{CourseDetail, CourseModule};
use crate::domain::strings;
use crate::shared::catalog::DetailSource;

static HAND_AUTHORED: Lazy<Vec<CourseDetail>> = Lazy::new(|| {
    vec![CourseDetail {
        id: "crs-001".into(),
        title: "Foundations of Digital Transformation".into(),
        provider: "DTMP Academy".into(),
        source: DetailSource::HandAuthored,
        summary: "A short, self-paced primer for anyone joining a transformation programme.".into(),
        modules: vec![
            CourseModule {
                title: "Why organisations transform".into(),
                duration_hours: 1,
                lessons: strings(&["Market pressures", "Value levers", "Case studies"]),
            },
            CourseModule {
                title: "Operating model shifts".into(),
                duration_hours: 2,
                lessons: strings(&["Product teams", "Funding models", "Decision rights"]),
            },
            CourseModule {
                title: "Leading the change".into(),
                duration_hours: 1,
                lessons: strings(&["Stakeholder mapping", "Communication rhythm"]),
            },
        ],
        outcomes: strings(&[
            "Explain the main value levers of digital transformation",
            "Recognise the operating-model changes a programme will ask for",
        ]),
        prerequisites: Vec::new(),
        certification: None,
    }]
});

/// Курсы с программой, подготовленной вручную
pub fn hand_authored_details() -> &'static [CourseDetail] {
    &HAND_AUTHORED
}
