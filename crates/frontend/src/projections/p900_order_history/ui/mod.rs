pub mod export_modal;
pub mod list;
