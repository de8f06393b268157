//! Scalar type classification for single cells.

use serde::{Deserialize, Serialize};

use crate::schema::ScalarType;

/// Signed integer width a cell must fit to classify as `Int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntWidth {
    Bits32,
    Bits64,
}

impl IntWidth {
    /// Map a bit count to a width.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(IntWidth::Bits32),
            64 => Some(IntWidth::Bits64),
            _ => None,
        }
    }

    fn fits(&self, text: &str) -> bool {
        match self {
            IntWidth::Bits32 => text.parse::<i32>().is_ok(),
            IntWidth::Bits64 => text.parse::<i64>().is_ok(),
        }
    }
}

impl Default for IntWidth {
    fn default() -> Self {
        IntWidth::Bits32
    }
}

/// Classifier configuration.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Integer width for `Int` classification.
    pub int_width: IntWidth,
    /// Separator between elements of an array cell.
    pub array_separator: char,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            int_width: IntWidth::default(),
            array_separator: ',',
        }
    }
}

/// Decides the scalar type of raw cell text.
#[derive(Debug, Clone, Default)]
pub struct CellClassifier {
    config: ClassifierConfig,
}

impl CellClassifier {
    /// Create a classifier with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with custom configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a cell.
    ///
    /// Cells of array columns that contain the separator are split and each
    /// element is classified. The cell takes the first element's type, unless
    /// some element is a `String`, in which case the whole cell is `String`.
    pub fn classify(&self, raw: &str, is_array: bool) -> ScalarType {
        if is_array && raw.contains(self.config.array_separator) {
            return self.classify_elements(raw);
        }
        self.classify_value(raw)
    }

    /// Classify a single value, ignoring any array separator.
    pub fn classify_value(&self, raw: &str) -> ScalarType {
        let trimmed = raw.trim();

        if self.is_int(trimmed) {
            ScalarType::Int
        } else if is_float(trimmed) {
            ScalarType::Float
        } else if is_double(trimmed) {
            ScalarType::Double
        } else if is_bool(trimmed) {
            ScalarType::Bool
        } else {
            ScalarType::String
        }
    }

    fn classify_elements(&self, raw: &str) -> ScalarType {
        let mut first = None;

        for element in raw.split(self.config.array_separator) {
            let detected = self.classify_value(element);
            if detected == ScalarType::String {
                return ScalarType::String;
            }
            first.get_or_insert(detected);
        }

        first.unwrap_or(ScalarType::String)
    }

    fn is_int(&self, text: &str) -> bool {
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && self.config.int_width.fits(text)
    }
}

/// Classify a cell with the default configuration.
pub fn classify(raw: &str, is_array: bool) -> ScalarType {
    CellClassifier::new().classify(raw, is_array)
}

/// Plain decimal syntax: sign, ASCII digits, `.` and exponent only.
///
/// Rejects the `inf`/`nan` spellings the standard float parser accepts.
fn is_decimal_syntax(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

fn is_float(text: &str) -> bool {
    is_decimal_syntax(text) && text.parse::<f32>().is_ok_and(f32::is_finite)
}

fn is_double(text: &str) -> bool {
    is_decimal_syntax(text) && text.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
}
