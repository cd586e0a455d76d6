use serde::{Deserialize, Serialize};

/// Уровень зрелости решения или практики
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Concept,
    Pilot,
    Production,
    Scaled,
}

impl MaturityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::Concept => "Concept",
            MaturityLevel::Pilot => "Pilot",
            MaturityLevel::Production => "Production",
            MaturityLevel::Scaled => "Scaled",
        }
    }

    pub fn all() -> Vec<MaturityLevel> {
        vec![
            MaturityLevel::Concept,
            MaturityLevel::Pilot,
            MaturityLevel::Production,
            MaturityLevel::Scaled,
        ]
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
