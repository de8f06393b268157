//! Sheet and workbook processing.

mod sheet;
mod workbook;

pub use sheet::{SheetProcessor, SheetResult};
pub use workbook::{WorkbookProcessor, WorkbookResult};
