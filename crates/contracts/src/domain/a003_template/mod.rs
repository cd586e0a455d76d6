pub mod aggregate;
pub mod data;

pub use aggregate::Template;
pub use data::templates;
