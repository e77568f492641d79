// Extraction module: heuristic field recognizers and the record builder.

pub mod airlines;
pub mod builder;
pub mod fields;

pub use builder::RecordBuilder;
