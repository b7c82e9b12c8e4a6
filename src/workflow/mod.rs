pub mod conversion;
pub mod definition;
pub mod persist;

pub use conversion::*;
pub use definition::*;
pub use persist::*;
