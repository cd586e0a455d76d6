pub mod complexity;
pub mod course_format;
pub mod course_level;
pub mod deployment_model;
pub mod maturity_level;
pub mod template_type;

pub use complexity::Complexity;
pub use course_format::CourseFormat;
pub use course_level::CourseLevel;
pub use deployment_model::DeploymentModel;
pub use maturity_level::MaturityLevel;
pub use template_type::TemplateType;
