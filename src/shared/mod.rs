/// Shared error types and result alias
pub mod error;
mod result;

pub use result::Result;
