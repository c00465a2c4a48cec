//! Root wrapper of every page rendered inside a tab.

use super::page_standard::*;
use leptos::prelude::*;

/// Sets the page id, the `data-page-category` and the BEM modifier class.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_sales_order--list"`
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) {
        log::warn!("Page id '{}' does not follow the entity--category form", page_id);
    }

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
