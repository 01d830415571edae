/// Public library interface for the workout report crate
///
/// This module exports the domain types (measurement record, training
/// variants, summary) and the report renderer so they can be used by
/// the binary or tests.

// Internal modules
mod domain;
mod report;

// Re-export public modules and types
pub use domain::*;
pub use report::render;
