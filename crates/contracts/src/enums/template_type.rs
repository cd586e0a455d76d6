use serde::{Deserialize, Serialize};

/// Тип шаблона документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateType {
    Document,
    Spreadsheet,
    Presentation,
    Dashboard,
}

impl TemplateType {
    pub fn label(&self) -> &'static str {
        match self {
            TemplateType::Document => "Document",
            TemplateType::Spreadsheet => "Spreadsheet",
            TemplateType::Presentation => "Presentation",
            TemplateType::Dashboard => "Dashboard",
        }
    }

    pub fn all() -> Vec<TemplateType> {
        vec![
            TemplateType::Document,
            TemplateType::Spreadsheet,
            TemplateType::Presentation,
            TemplateType::Dashboard,
        ]
    }
}

impl std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
