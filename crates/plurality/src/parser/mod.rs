//! Message template and interval parser.
//!
//! This module splits pipe-delimited templates into variants and parses the
//! interval expressions that may prefix them. The parser produces an AST that
//! the interpreter uses for variant selection, and that external tooling can
//! inspect.

pub mod ast;
pub mod error;
mod interval;
mod message;

pub use ast::*;
pub use error::ParseError;
pub use interval::{contains_interval, parse_interval};
pub use message::split_message;
