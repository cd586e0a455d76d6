use serde::{Deserialize, Serialize};

/// Формат проведения курса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseFormat {
    SelfPaced,
    InstructorLed,
    Blended,
}

impl CourseFormat {
    pub fn label(&self) -> &'static str {
        match self {
            CourseFormat::SelfPaced => "Self-paced",
            CourseFormat::InstructorLed => "Instructor-led",
            CourseFormat::Blended => "Blended",
        }
    }

    pub fn all() -> Vec<CourseFormat> {
        vec![
            CourseFormat::SelfPaced,
            CourseFormat::InstructorLed,
            CourseFormat::Blended,
        ]
    }
}

impl std::fmt::Display for CourseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
