pub mod catalog_card;
pub mod catalog_results;
pub mod catalog_tabs;
pub mod filter_panel;
