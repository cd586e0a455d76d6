pub mod blueprints;
pub mod home;
pub mod knowledge_center;
pub mod not_found;
pub mod templates;
