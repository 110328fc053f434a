use clap::ValueEnum;

/// The notation an expression is written in.
///
/// The notation is always chosen by the caller; it is never guessed from the
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Notation {
    /// Operators between operands, e.g. `(1 + 2) * 3`.
    #[default]
    Infix,
    /// Operators after operands, e.g. `1 2 + 3 *`.
    Postfix,
}

/// Settings shared by parsing and evaluation.
///
/// ## Example
/// ```
/// use rpncalc::{Notation, Options};
///
/// let options = Options::new(Notation::Postfix).with_trace(true);
/// assert_eq!(options.notation, Notation::Postfix);
/// assert!(options.trace);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Selects the infix grammar or the postfix relabeling.
    pub notation: Notation,
    /// Reports every grammar rule entry, emitted instruction and stack
    /// operation as a `tracing` debug event. Never changes a result.
    pub trace:    bool,
}

impl Options {
    /// Creates options for the given notation with tracing disabled.
    #[must_use]
    pub const fn new(notation: Notation) -> Self {
        Self { notation,
               trace: false }
    }

    /// Options for infix input.
    #[must_use]
    pub const fn infix() -> Self {
        Self::new(Notation::Infix)
    }

    /// Options for postfix input.
    #[must_use]
    pub const fn postfix() -> Self {
        Self::new(Notation::Postfix)
    }

    /// Returns a copy with the debug trace switched on or off.
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
