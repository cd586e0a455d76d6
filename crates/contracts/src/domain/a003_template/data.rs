use once_cell::sync::Lazy;

use super::aggregate::Template;
use crate::domain::strings;
use crate::enums::TemplateType;

static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    vec![
        Template {
            id: "tpl-001".into(),
            title: "Transformation Business Case".into(),
            description: "Structured business case with benefits model, cost breakdown and risk register.".into(),
            template_type: TemplateType::Document,
            category: "Strategy".into(),
            file_format: "DOCX".into(),
            tags: strings(&["Business case", "ROI", "Investment"]),
            downloads: 1240,
        },
        Template {
            id: "tpl-002".into(),
            title: "Benefits Realisation Tracker".into(),
            description: "Workbook to baseline, forecast and track transformation benefits by quarter.".into(),
            template_type: TemplateType::Spreadsheet,
            category: "Reporting".into(),
            file_format: "XLSX".into(),
            tags: strings(&["Benefits", "KPI", "Tracking"]),
            downloads: 860,
        },
        Template {
            id: "tpl-003".into(),
            title: "Steering Committee Pack".into(),
            description: "Monthly steering deck covering status, decisions required and escalations.".into(),
            template_type: TemplateType::Presentation,
            category: "Governance".into(),
            file_format: "PPTX".into(),
            tags: strings(&["Steering", "Status", "Governance"]),
            downloads: 2015,
        },
        Template {
            id: "tpl-004".into(),
            title: "Programme RACI Matrix".into(),
            description: "Roles and responsibilities matrix for programme, workstream and vendor roles.".into(),
            template_type: TemplateType::Spreadsheet,
            category: "Governance".into(),
            file_format: "XLSX".into(),
            tags: strings(&["RACI", "Roles", "Operating model"]),
            downloads: 1530,
        },
        Template {
            id: "tpl-005".into(),
            title: "Release Readiness Checklist".into(),
            description: "Go/no-go checklist covering testing, cutover, support and communications.".into(),
            template_type: TemplateType::Document,
            category: "Delivery".into(),
            file_format: "DOCX".into(),
            tags: strings(&["Release", "Cutover", "Checklist"]),
            downloads: 975,
        },
        Template {
            id: "tpl-006".into(),
            title: "Digital Maturity Dashboard".into(),
            description: "Dashboard that scores capability maturity across people, process, data and technology.".into(),
            template_type: TemplateType::Dashboard,
            category: "Reporting".into(),
            file_format: "PBIX".into(),
            tags: strings(&["Maturity", "Assessment", "Power BI"]),
            downloads: 640,
        },
    ]
});

/// Статический каталог шаблонов
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::duplicate_ids;

    #[test]
    fn test_ids_are_unique() {
        assert!(duplicate_ids(templates()).is_empty());
    }
}
