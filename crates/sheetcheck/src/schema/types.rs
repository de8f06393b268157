//! Core type definitions for inferred cell and column types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar type assigned to a single cell or array element.
///
/// Classification tries the variants in the order Int, Float, Double, Bool and
/// falls back to String. Voting never uses this order: a column's type is the
/// most frequent one, whatever its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    /// Case-insensitive `true` / `false`.
    Bool,
    /// Anything that fails every other parse, including empty text.
    String,
    /// Integral number within the configured integer width.
    Int,
    /// Decimal number representable as a finite 32-bit float.
    Float,
    /// Decimal number only representable as a finite 64-bit float.
    Double,
}

impl ScalarType {
    /// Upper-case label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ScalarType::Bool => "BOOL",
            ScalarType::String => "STRING",
            ScalarType::Int => "INT",
            ScalarType::Float => "FLOAT",
            ScalarType::Double => "DOUBLE",
        }
    }
}

impl Default for ScalarType {
    fn default() -> Self {
        ScalarType::String
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
