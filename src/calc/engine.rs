// src/calc/engine.rs

//! The transition engine: a finite-state machine holding the current state,
//! the two operand slots, the pending operator, the last computed result,
//! and the entry buffer. It consumes one symbol per call and
//! deterministically updates state and buffer.
//!
//! The one correctness-critical decision here is that display precision and
//! internal precision are decoupled: only the visible buffer is
//! width-truncated, while chained computations always reuse the stored
//! full-precision `last_result`.

use crate::calc::buffer::EntryBuffer;
use crate::calc::eval::{self, MathError};
use crate::calc::{Operator, Symbol, SymbolClass};
use crate::config::{Config, LimitsConfig};

use log::{debug, trace, warn};

/// The machine's states. There is no terminal state; the machine cycles
/// indefinitely until cleared.
///
/// `ResultEqual` and `ResultChain` both follow a computation but differ on
/// what a digit press means: after "=" a digit starts an entirely fresh
/// computation, whereas after a chaining operator a digit continues the
/// running total, so `last_result` keeps feeding `operand1` at full
/// precision no matter how many digits the display had to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    Begin,
    WaitOperand1,
    EnteringOperand1,
    WaitOperand2,
    EnteringOperand2,
    ResultEqual,
    ResultChain,
}

/// The calculator core.
///
/// An explicit, constructible value: the host owns it, feeds it one
/// [`Symbol`] at a time through [`Calculator::process_symbol`], and polls
/// [`Calculator::display_text`] after each call. Single-threaded by design;
/// a threaded host must treat each `process_symbol` call as one atomic
/// critical section.
#[derive(Debug)]
pub struct Calculator {
    limits: LimitsConfig,
    buffer: EntryBuffer,
    operand1: Option<f64>,
    operand2: Option<f64>,
    pending_op: Option<Operator>,
    last_result: Option<f64>,
    display: String,
    pub(super) state: State,
}

impl Calculator {
    /// Creates a new `Calculator` showing the seeded "0" display.
    pub fn new(config: &Config) -> Self {
        let mut calc = Calculator {
            limits: config.limits.clone(),
            buffer: EntryBuffer::new(config.display.width),
            operand1: None,
            operand2: None,
            pending_op: None,
            last_result: None,
            display: String::new(),
            state: State::Begin,
        };
        calc.seed_initial_display();
        calc
    }

    /// Consumes one input symbol. See [`crate::calc::CalculatorInterface`].
    pub fn process_symbol(&mut self, symbol: Symbol) -> bool {
        // Control symbols bypass the transition table entirely.
        if symbol.class() == SymbolClass::Control {
            match symbol {
                Symbol::Clear => self.all_clear(),
                Symbol::Backspace => self.backspace(),
                _ => {}
            }
            return true;
        }
        self.cycle_state(symbol)
    }

    /// The text a rendering collaborator should show. Holds the buffer's
    /// contents as of the last rendered transition, or an error code after
    /// a failed computation.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Unconditionally resets every field and re-seeds the "0" display.
    pub fn all_clear(&mut self) {
        trace!("all-clear");
        self.state_clear();
        self.seed_initial_display();
    }

    /// Removes the last buffer character while an operand is being entered;
    /// a no-op in every other state.
    fn backspace(&mut self) {
        match self.state {
            State::EnteringOperand1 | State::EnteringOperand2 => {
                self.buffer.pop_or_zero();
                self.display_update();
            }
            _ => debug!("backspace ignored in {:?}", self.state),
        }
    }

    /// One step of the transition table. Returns `false` only when an
    /// arithmetic error occurred (the machine has already reset itself and
    /// surfaced the error code).
    fn cycle_state(&mut self, symbol: Symbol) -> bool {
        trace!("{:?} <- {:?}", self.state, symbol);
        match self.state {
            // Only reachable before the first seed; the symbol is dropped.
            State::Begin => self.seed_initial_display(),

            State::WaitOperand1 => match symbol {
                // "0" re-renders the seeded zero without a state change.
                Symbol::Digit(0) => self.display_update(),
                Symbol::Digit(_) => {
                    self.buffer.clear();
                    self.append_entry(symbol);
                    self.state = State::EnteringOperand1;
                }
                // The seeded "0" stays, giving a "0." entry.
                Symbol::Decimal => {
                    self.append_entry(symbol);
                    self.state = State::EnteringOperand1;
                }
                Symbol::Op(op) => self.finalize_operand1(op),
                _ => {}
            },

            State::EnteringOperand1 => match symbol {
                Symbol::Digit(_) | Symbol::Decimal => self.append_entry(symbol),
                Symbol::Op(op) => self.finalize_operand1(op),
                _ => {}
            },

            State::WaitOperand2 => match symbol {
                Symbol::Digit(_) | Symbol::Decimal => {
                    self.seed_entry(symbol);
                    self.state = State::EnteringOperand2;
                }
                // The user may still change their mind about the operator.
                Symbol::Op(op) => self.pending_op = Some(op),
                _ => {}
            },

            // The only state in which "evaluate" is meaningful.
            State::EnteringOperand2 => match symbol {
                Symbol::Digit(_) | Symbol::Decimal => self.append_entry(symbol),
                Symbol::Op(op) => {
                    self.operand2 = Some(self.buffer.parse());
                    match self.compute_pending() {
                        Ok(result) => {
                            self.show_result(result);
                            self.pending_op = Some(op);
                            self.state = State::ResultChain;
                        }
                        Err(err) => return self.enter_error(err),
                    }
                }
                Symbol::Evaluate => {
                    self.operand2 = Some(self.buffer.parse());
                    match self.compute_pending() {
                        Ok(result) => {
                            self.show_result(result);
                            self.state = State::ResultEqual;
                        }
                        Err(err) => return self.enter_error(err),
                    }
                }
                _ => {}
            },

            // After "=": a digit starts an entirely fresh computation; an
            // operator behaves exactly as it does after a chained result.
            State::ResultEqual => match symbol {
                Symbol::Digit(_) | Symbol::Decimal => {
                    self.state_clear();
                    self.seed_entry(symbol);
                    self.state = State::EnteringOperand1;
                }
                Symbol::Op(op) => self.chain_with_operator(op),
                _ => {}
            },

            // After a chaining operator: both digits and operators keep the
            // full-precision running total as the next first operand.
            State::ResultChain => match symbol {
                Symbol::Digit(_) | Symbol::Decimal => {
                    self.seed_entry(symbol);
                    self.operand1 = self.last_result;
                    self.state = State::EnteringOperand2;
                }
                Symbol::Op(op) => self.chain_with_operator(op),
                _ => {}
            },
        }
        true
    }

    /// BEGIN-state entry: seed the "0" display and start waiting for the
    /// first operand. Shared by construction and all-clear.
    fn seed_initial_display(&mut self) {
        self.buffer.push('0');
        self.display_update();
        self.state = State::WaitOperand1;
    }

    /// Appends one numeric-entry symbol to the buffer (subject to the
    /// buffer's width cap) and re-renders.
    fn append_entry(&mut self, symbol: Symbol) {
        if let Some(c) = symbol.entry_char() {
            self.buffer.push(c);
            self.display_update();
        }
    }

    /// Starts a fresh operand entry: clears the buffer, seeds a leading "0"
    /// in front of a bare decimal point, then appends the symbol.
    fn seed_entry(&mut self, symbol: Symbol) {
        self.buffer.clear();
        if symbol == Symbol::Decimal {
            self.buffer.push('0');
        }
        self.append_entry(symbol);
    }

    /// Parses the buffer as the first operand and waits for the second.
    fn finalize_operand1(&mut self, op: Operator) {
        self.operand1 = Some(self.buffer.parse());
        self.pending_op = Some(op);
        self.state = State::WaitOperand2;
    }

    /// Shared entry logic for an operator press after any computed result:
    /// the full-precision `last_result` becomes the next first operand.
    fn chain_with_operator(&mut self, op: Operator) {
        self.operand1 = self.last_result;
        self.pending_op = Some(op);
        self.state = State::WaitOperand2;
    }

    /// Applies the pending operator to the stored operands and records the
    /// result at full precision.
    fn compute_pending(&mut self) -> Result<f64, MathError> {
        let op = match self.pending_op {
            Some(op) => op,
            None => {
                // Unreachable through the transition table; keep the machine
                // honest rather than panicking.
                warn!("compute requested with no pending operator");
                return Ok(self.operand2.unwrap_or_default());
            }
        };
        let lhs = self.operand1.unwrap_or_default();
        let rhs = self.operand2.unwrap_or_default();
        let result = eval::compute(lhs, op, rhs, &self.limits)?;
        trace!("{} {:?} {} = {}", lhs, op, rhs, result);
        self.last_result = Some(result);
        Ok(result)
    }

    /// Formats a computed result into the width-capped buffer and renders it.
    fn show_result(&mut self, result: f64) {
        self.buffer.load_result(result);
        self.display_update();
    }

    /// Full reset plus the error code as display text. The next numeric
    /// symbol starts a clean entry; there is no retry.
    fn enter_error(&mut self, err: MathError) -> bool {
        warn!("arithmetic error: {}", err);
        self.all_clear();
        self.display.clear();
        self.display.push_str(err.display_code());
        false
    }

    /// Re-initializes every field together. Transitions that merely start a
    /// fresh operand use `EntryBuffer::clear` instead.
    fn state_clear(&mut self) {
        self.buffer.clear();
        self.operand1 = None;
        self.operand2 = None;
        self.pending_op = None;
        self.last_result = None;
        self.state = State::Begin;
    }

    /// Copies the buffer into the display text. Transitions that do not call
    /// this leave the previously rendered text visible.
    fn display_update(&mut self) {
        self.display.clear();
        self.display.push_str(self.buffer.text());
    }
}
