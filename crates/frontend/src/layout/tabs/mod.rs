//! Tab management
//!
//! - `page` wraps the content of one opened tab
//! - `registry` maps a tab key to its view
//! - `tab_labels` holds tab keys and titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_key, tab_label_for_key, tab_title};
