pub mod back_office;

pub use back_office::{use_back_office, BackOfficeStore};
