// src/keys.rs

//! Maps host input characters to calculator [`Symbol`]s.
//!
//! This is the boundary where the event-wiring layer's vocabulary (key
//! presses) is translated into the core's instruction set. Characters with
//! no binding produce no symbol and are dropped by the caller.

use crate::calc::{Operator, Symbol};

/// Translates one host character into a [`Symbol`], if it is bound.
pub fn symbol_for_char(c: char) -> Option<Symbol> {
    match c {
        '0'..='9' => Some(Symbol::Digit(c as u8 - b'0')),
        '.' | ',' => Some(Symbol::Decimal),
        '+' => Some(Symbol::Op(Operator::Add)),
        '-' => Some(Symbol::Op(Operator::Subtract)),
        '*' => Some(Symbol::Op(Operator::Multiply)),
        '/' => Some(Symbol::Op(Operator::Divide)),
        '=' | '\r' | '\n' => Some(Symbol::Evaluate),
        'c' | 'C' | '\x1b' => Some(Symbol::Clear),
        '\x08' | '\x7f' => Some(Symbol::Backspace),
        _ => None,
    }
}
