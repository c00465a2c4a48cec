pub mod dto;
pub mod export;

pub use dto::*;
pub use export::*;
