//! Inference engine: cell classification and column type voting.

mod classifier;
mod tally;

pub use classifier::{CellClassifier, ClassifierConfig, IntWidth, classify};
pub use tally::{ColumnTypeTally, TypeCounts, vote};
