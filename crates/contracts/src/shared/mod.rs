pub mod catalog;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod routes;
pub mod search;
pub mod tabs;
