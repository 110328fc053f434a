/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer types
/// without risking silent truncation. All functions return a `Result`, which
/// is `Ok` if the conversion is lossless and an error otherwise.
pub mod num;
