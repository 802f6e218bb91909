pub mod engine;
pub mod identifiers;
pub mod logger;
pub mod protocol;

pub use identifiers::*;
