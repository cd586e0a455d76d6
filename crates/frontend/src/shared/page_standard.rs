//! Page category constants for page standardization.
//!
//! Every page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"blueprints--list"`)
//!   - `data-page-category` with one of the constants below

/// Catalog list: tabs, facets, search and cards.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail page for a single catalog record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Intentionally custom design (home, not-found).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("blueprints--list"));
        assert!(is_valid_page_id("p100_blueprint_detail--detail"));
        assert!(!is_valid_page_id("blueprints"));
        assert!(!is_valid_page_id("--list"));
    }
}
