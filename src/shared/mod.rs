/// Shared kernel - common error and result types
///
/// Utilities used across all layers of the crate.
pub mod error;
pub mod result;

pub use result::Result;
