// src/calc/mod.rs

//! The calculator's input-processing core.
//! It acts as a state machine consuming one symbol per call and maintaining
//! the display text that a rendering collaborator polls.

mod buffer;
mod engine;
mod eval;

// Re-export items for use by the host shim and within this module
pub use engine::Calculator;
pub use eval::MathError;

/// Inputs that the calculator processes.
///
/// This enum encapsulates the discrete user actions the `Calculator` can
/// receive and act upon. It serves as the primary "instruction set" for the
/// calculator's internal state machine; the host layer is responsible for
/// mapping clicks or key presses onto these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal separator key.
    Decimal,
    /// One of the four binary operator keys.
    Op(Operator),
    /// The evaluate ("=") key.
    Evaluate,
    /// All-clear. Handled out of band, independent of the current state.
    Clear,
    /// Backspace. Handled out of band; only effective while entering an
    /// operand.
    Backspace,
}

/// The four binary operations the evaluator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// The disjoint symbol categories the transition table dispatches on.
///
/// `Control` symbols never reach the per-state table; they are handled
/// unconditionally by `Calculator::process_symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    NumericEntry,
    BinaryOperator,
    Evaluate,
    Control,
}

impl Symbol {
    /// Classifies this symbol into one of the dispatch categories.
    pub fn class(self) -> SymbolClass {
        match self {
            Symbol::Digit(_) | Symbol::Decimal => SymbolClass::NumericEntry,
            Symbol::Op(_) => SymbolClass::BinaryOperator,
            Symbol::Evaluate => SymbolClass::Evaluate,
            Symbol::Clear | Symbol::Backspace => SymbolClass::Control,
        }
    }

    /// The character this symbol contributes to the entry buffer, for
    /// numeric-entry symbols only.
    pub(crate) fn entry_char(self) -> Option<char> {
        match self {
            Symbol::Digit(d) => {
                debug_assert!(d <= 9, "digit symbols carry a single decimal digit");
                Some((b'0' + d) as char)
            }
            Symbol::Decimal => Some('.'),
            _ => None,
        }
    }
}

/// Defines the essential public interface of the calculator core.
///
/// This trait abstracts the two calls the host shim needs, so that the
/// rendering/event-wiring layer can drive the core without being tied to a
/// specific implementation: it delivers symbols one at a time and reads back
/// whatever string the core currently holds.
pub trait CalculatorInterface {
    /// Consumes one input symbol, updating state, buffer, and display text.
    ///
    /// Returns `false` when the symbol triggered an arithmetic error (the
    /// machine has already reset itself and the display holds the error
    /// code), `true` otherwise. Never panics and never unwinds; anomalous
    /// input is a silent no-op.
    fn process_symbol(&mut self, symbol: Symbol) -> bool;

    /// The text the rendering collaborator should show: the entry buffer's
    /// contents, or an error code after a failed computation.
    fn display_text(&self) -> &str;
}

impl CalculatorInterface for Calculator {
    fn process_symbol(&mut self, symbol: Symbol) -> bool {
        self.process_symbol(symbol)
    }

    fn display_text(&self) -> &str {
        self.display_text()
    }
}

#[cfg(test)]
mod tests;
