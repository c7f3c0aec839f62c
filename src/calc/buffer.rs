// src/calc/buffer.rs

//! The bounded digit-entry buffer and result formatting.
//!
//! Width is counted in display cells: the decimal separator's glyph has zero
//! width on the target display, so it is excluded from the count. Only the
//! displayed text is width-constrained; parsed operand values keep full
//! precision.

use log::debug;

/// The characters currently being typed or displayed: digits plus at most
/// one decimal separator, never wider than the configured display.
#[derive(Debug, Clone)]
pub struct EntryBuffer {
    contents: String,
    max_width: usize,
}

impl EntryBuffer {
    pub fn new(max_width: usize) -> Self {
        EntryBuffer {
            contents: String::new(),
            max_width,
        }
    }

    /// Counted width of the buffer: total characters minus the separator.
    fn width(&self) -> usize {
        self.contents.len() - usize::from(self.contents.contains('.'))
    }

    /// Appends one entry character (`'0'..='9'` or `'.'`).
    ///
    /// Input past the width cap and a second separator are dropped. These
    /// are not errors; the width is a physical constraint of the display.
    pub fn push(&mut self, c: char) {
        if self.width() >= self.max_width {
            debug!(
                "entry {:?} rejected: display width {} reached",
                c, self.max_width
            );
            return;
        }
        if c == '.' && self.contents.contains('.') {
            debug!("duplicate decimal separator rejected");
            return;
        }
        self.contents.push(c);
    }

    /// Empties the buffer. Distinct from a machine reset: operands and the
    /// pending operator are untouched.
    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Removes the last character, or leaves a lone "0" when at most one
    /// character remains.
    pub fn pop_or_zero(&mut self) {
        if self.contents.len() > 1 {
            self.contents.pop();
        } else {
            self.contents.clear();
            self.contents.push('0');
        }
    }

    /// Numeric value of the current entry. An empty buffer reads as zero.
    pub fn parse(&self) -> f64 {
        if self.contents.is_empty() {
            return 0.0;
        }
        // Only digits and at most one separator can be present, so the one
        // remaining unparsable spelling is a lone ".", which also reads as 0.
        self.contents.parse().unwrap_or(0.0)
    }

    pub fn text(&self) -> &str {
        &self.contents
    }

    /// Replaces the entry with the display spelling of a computed result.
    pub fn load_result(&mut self, value: f64) {
        self.contents = format_result(value, self.max_width);
    }
}

/// Formats a full-precision result for a `width`-cell display.
///
/// The integer part is never truncated: the fraction gets whatever width
/// remains, rounded to that many places, with trailing zero-digits and a
/// trailing bare separator stripped (`3.50000000` shows as `3.5`,
/// `4.00000000` as `4`). When the integer digits already consume the whole
/// display, the value is re-rounded to the nearest integer and shown without
/// a fraction. A sign counts against the width like any other character.
pub fn format_result(value: f64, width: usize) -> String {
    let int_part = value.trunc();
    let int_str = format!("{}", int_part);
    let frac_width = width.saturating_sub(int_str.len());
    if frac_width == 0 {
        return format!("{}", value.round());
    }

    // The fraction keeps the sign of `value`, but only its digits are
    // spelled; the sign is already carried by the integer-part string
    // (including the "-0" spelling for values truncating to negative zero).
    let frac = value - int_part;
    let frac_str = format!("{:.*}", frac_width, frac);
    let frac_digits = frac_str.rsplit('.').next().unwrap_or("");

    let mut spelled = format!("{int_str}.{frac_digits}");
    while spelled.ends_with('0') {
        spelled.pop();
    }
    if spelled.ends_with('.') {
        spelled.pop();
    }
    spelled
}
