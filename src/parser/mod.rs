//! Basic low-level line parsing functionality.
pub mod line_parser;
pub mod parsing_error;

pub use line_parser::LineParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
