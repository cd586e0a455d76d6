pub mod catalogs;
pub mod details;
