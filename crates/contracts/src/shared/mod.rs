pub mod config;
pub mod demo_data;
pub mod export;
pub mod format;
