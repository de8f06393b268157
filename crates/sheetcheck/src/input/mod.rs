//! Input loading and data source handling.

mod parser;
mod source;
mod workbook;

pub use parser::{Parser, ParserConfig};
pub use source::{RawSheet, SourceFormat, SourceMetadata};
pub use workbook::WorkbookLoader;
