//! Core types for placeholder replacement.

mod replacements;
mod value;

pub use replacements::Replacements;
pub use value::Value;
