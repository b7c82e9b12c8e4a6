pub mod import;
pub mod types;

pub use import::*;
pub use types::*;
