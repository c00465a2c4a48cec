pub mod attachment_input;
pub mod detail_card;
pub mod filter_panel;
pub mod page_header;
pub mod status_update_modal;
pub mod table;
pub mod timeline_view;
pub mod ui;
