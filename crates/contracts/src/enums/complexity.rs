use serde::{Deserialize, Serialize};

/// Техническая сложность решения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Метка, которая показывается в UI и используется как значение фасета
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }

    pub fn all() -> Vec<Complexity> {
        vec![Complexity::Low, Complexity::Medium, Complexity::High]
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
