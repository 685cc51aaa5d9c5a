//! Input parsing and the in-memory table model.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig, parse_delimiter};
pub use source::{DataTable, SourceMetadata};
