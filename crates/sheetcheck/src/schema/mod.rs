//! Schema types for representing inferred sheet structure.

mod column;
mod record;
mod types;

pub use column::{ARRAY_MARKER, ColumnHeader};
pub use record::CellRecord;
pub use types::ScalarType;
