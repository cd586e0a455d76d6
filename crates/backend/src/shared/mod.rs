pub mod api_error;
pub mod catalog_query;
pub mod config;
pub mod format;
