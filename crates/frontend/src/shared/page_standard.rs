//! Page categories of the tab pages.
//!
//! Every page root carries an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a001_sales_order--list"`) and a `data-page-category`.

/// Table of records with filters
pub const PAGE_CAT_LIST: &str = "list";

/// Single record with its activity log
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Read-only report over several record kinds
pub const PAGE_CAT_REPORT: &str = "report";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_REPORT];

/// Check that a page id has the `{entity}--{category}` shape
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_sales_order--list"));
        assert!(is_valid_page_id("p900_order_history--report"));
        assert!(!is_valid_page_id("a001_sales_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_sales_order--wizard"));
    }
}
