/// Dispatch and checked arithmetic for binary operators.
pub mod core;

/// Integer exponentiation, including negative exponents.
pub mod power;
