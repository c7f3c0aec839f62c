// src/calc/tests.rs

// Engine-level scenario tests driving the public API of the `calc` module
// the same way a host shim would: scripts of host characters run through
// `keys::symbol_for_char`.

use crate::calc::engine::State;
use crate::calc::{Calculator, Operator, Symbol, SymbolClass};
use crate::config::Config;
use crate::keys::symbol_for_char;

fn new_calc() -> Calculator {
    Calculator::new(&Config::default())
}

// Feeds a script of host characters; see keys::symbol_for_char for the
// bindings ('=' evaluate, 'c' all-clear, '\x08' backspace).
fn press(calc: &mut Calculator, script: &str) {
    for c in script.chars() {
        if let Some(symbol) = symbol_for_char(c) {
            calc.process_symbol(symbol);
        }
    }
}

fn display_after(script: &str) -> String {
    let mut calc = new_calc();
    press(&mut calc, script);
    calc.display_text().to_string()
}

// --- Symbol classification ---

#[test]
fn symbols_partition_into_disjoint_classes() {
    assert_eq!(Symbol::Digit(7).class(), SymbolClass::NumericEntry);
    assert_eq!(Symbol::Decimal.class(), SymbolClass::NumericEntry);
    assert_eq!(
        Symbol::Op(Operator::Multiply).class(),
        SymbolClass::BinaryOperator
    );
    assert_eq!(Symbol::Evaluate.class(), SymbolClass::Evaluate);
    assert_eq!(Symbol::Clear.class(), SymbolClass::Control);
    assert_eq!(Symbol::Backspace.class(), SymbolClass::Control);
}

// --- Power-on and plain entry ---

#[test]
fn powers_on_showing_zero() {
    let calc = new_calc();
    assert_eq!(calc.display_text(), "0");
    assert_eq!(calc.state, State::WaitOperand1);
}

#[test]
fn leading_zeros_do_not_accumulate() {
    assert_eq!(display_after("000"), "0");
    assert_eq!(display_after("07"), "7");
}

#[test]
fn decimal_point_first_seeds_a_leading_zero() {
    assert_eq!(display_after("."), "0.");
    assert_eq!(display_after(".5"), "0.5");
}

#[test]
fn duplicate_decimal_points_are_dropped() {
    assert_eq!(display_after("1..5"), "1.5");
}

// --- End-to-end scenarios ---

#[test_log::test]
fn adds_two_integers() {
    assert_eq!(display_after("2+3="), "5");
}

#[test_log::test]
fn adds_two_decimals() {
    assert_eq!(display_after("1.5+2.5="), "4");
}

#[test_log::test]
fn division_by_zero_shows_the_code_and_resets() {
    let mut calc = new_calc();
    press(&mut calc, "7/0=");
    assert_eq!(calc.display_text(), "DIV.BY.0");
    assert_eq!(calc.state, State::WaitOperand1);

    // a digit starts a clean new entry
    press(&mut calc, "9");
    assert_eq!(calc.display_text(), "9");
    press(&mut calc, "+1=");
    assert_eq!(calc.display_text(), "10");
}

#[test_log::test]
fn equals_then_operator_chains_on_last_result() {
    let mut calc = new_calc();
    press(&mut calc, "100+2=");
    assert_eq!(calc.display_text(), "102");

    // "+3=" must use the stored 102 as the first operand
    press(&mut calc, "+3=");
    assert_eq!(calc.display_text(), "105");
}

#[test]
fn eleventh_digit_is_rejected_at_width_ten() {
    let display = display_after("12345678901");
    assert_eq!(display, "1234567890");
    assert_eq!(display.len(), 10);
}

#[test_log::test]
fn overflowing_result_shows_the_code() {
    assert_eq!(display_after("9999999999*2="), "OVERFLOW");
}

#[test]
fn underflowing_result_shows_the_code() {
    assert_eq!(display_after("5-9999999999="), "UNDERFLOW");
}

// --- Width invariant ---

#[test]
fn counted_width_never_exceeds_the_configured_maximum() {
    let mut calc = new_calc();
    press(&mut calc, "3.14159265358979323846264338");
    let digits = calc.display_text().chars().filter(|c| *c != '.').count();
    assert_eq!(digits, 10);
    assert_eq!(calc.display_text(), "3.141592653");
}

// --- Chaining and precision ---

#[test_log::test]
fn chained_operations_keep_full_precision() {
    // 1 / 1024 shows rounded on a ten-cell display, but the chained
    // multiplication must see the exact 0.0009765625 and return exactly 1.
    let mut calc = new_calc();
    press(&mut calc, "1/1024*");
    assert!(calc.display_text().starts_with("0.00097656"));
    press(&mut calc, "1024=");
    assert_eq!(calc.display_text(), "1");
}

#[test]
fn operator_press_after_second_operand_computes_and_chains() {
    let mut calc = new_calc();
    press(&mut calc, "2+3+");
    assert_eq!(calc.display_text(), "5");
    assert_eq!(calc.state, State::ResultChain);
    press(&mut calc, "4=");
    assert_eq!(calc.display_text(), "9");
}

#[test]
fn digit_after_chained_result_continues_the_chain() {
    // after "2+3+" the pending operator and last result are retained; a
    // digit starts the next second operand against the running total
    let mut calc = new_calc();
    press(&mut calc, "2+3+");
    press(&mut calc, "4");
    assert_eq!(calc.display_text(), "4");
    assert_eq!(calc.state, State::EnteringOperand2);
    press(&mut calc, "=");
    assert_eq!(calc.display_text(), "9");
}

#[test]
fn digit_after_equals_starts_entirely_fresh() {
    let mut calc = new_calc();
    press(&mut calc, "2+3=");
    assert_eq!(calc.display_text(), "5");

    press(&mut calc, "7");
    assert_eq!(calc.display_text(), "7");
    assert_eq!(calc.state, State::EnteringOperand1);

    // no trace of the previous computation remains
    press(&mut calc, "+1=");
    assert_eq!(calc.display_text(), "8");
}

#[test]
fn operator_can_be_changed_before_the_second_operand() {
    assert_eq!(display_after("8-*2="), "16");
}

// --- No-op symbols ---

#[test]
fn evaluate_is_ignored_until_the_second_operand() {
    // "=" in WaitOperand1 and EnteringOperand1 does nothing
    assert_eq!(display_after("="), "0");
    let mut calc = new_calc();
    press(&mut calc, "5=");
    assert_eq!(calc.display_text(), "5");
    assert_eq!(calc.state, State::EnteringOperand1);
    press(&mut calc, "+3=");
    assert_eq!(calc.display_text(), "8");
}

#[test]
fn evaluate_after_a_result_is_ignored() {
    let mut calc = new_calc();
    press(&mut calc, "2+3==");
    assert_eq!(calc.display_text(), "5");
    assert_eq!(calc.state, State::ResultEqual);
}

// --- Out-of-band controls ---

#[test]
fn backspace_edits_an_operand_entry() {
    let mut calc = new_calc();
    press(&mut calc, "123\x08");
    assert_eq!(calc.display_text(), "12");
}

#[test]
fn backspace_on_a_single_character_leaves_zero() {
    let mut calc = new_calc();
    press(&mut calc, "1\x08");
    assert_eq!(calc.display_text(), "0");
}

#[test]
fn backspace_outside_entry_states_is_a_no_op() {
    let mut calc = new_calc();
    press(&mut calc, "12+");
    assert_eq!(calc.state, State::WaitOperand2);
    press(&mut calc, "\x08");
    assert_eq!(calc.display_text(), "12");
    assert_eq!(calc.state, State::WaitOperand2);
    press(&mut calc, "3=");
    assert_eq!(calc.display_text(), "15");
}

#[test]
fn all_clear_resets_mid_computation() {
    let mut calc = new_calc();
    press(&mut calc, "12+3");
    press(&mut calc, "c");
    assert_eq!(calc.display_text(), "0");
    assert_eq!(calc.state, State::WaitOperand1);
    press(&mut calc, "4+4=");
    assert_eq!(calc.display_text(), "8");
}

// --- Error surface details ---

#[test]
fn process_symbol_reports_the_failed_computation() {
    let mut calc = new_calc();
    press(&mut calc, "7/0");
    assert!(!calc.process_symbol(Symbol::Evaluate));
    // the machine already reset; further symbols succeed
    assert!(calc.process_symbol(Symbol::Digit(9)));
}

#[test]
fn error_code_stays_visible_until_the_next_render() {
    // an operator press never re-renders, so the code remains on screen
    let mut calc = new_calc();
    press(&mut calc, "7/0=");
    press(&mut calc, "+");
    assert_eq!(calc.display_text(), "DIV.BY.0");
    press(&mut calc, "5");
    assert_eq!(calc.display_text(), "5");
}

#[test_log::test]
fn machine_is_usable_after_an_overflow() {
    let mut calc = new_calc();
    press(&mut calc, "9999999999*2=");
    assert_eq!(calc.display_text(), "OVERFLOW");
    press(&mut calc, "1+1=");
    assert_eq!(calc.display_text(), "2");
}

// --- Result formatting through the engine ---

#[test]
fn results_render_with_insignificant_digits_stripped() {
    assert_eq!(display_after("7/2="), "3.5");
    assert_eq!(display_after("8/2="), "4");
}

#[test]
fn negative_results_keep_their_sign() {
    assert_eq!(display_after("1-1.5="), "-0.5");
    assert_eq!(display_after("3-15="), "-12");
}

#[test]
fn redisplaying_a_result_is_stable() {
    // chaining "+0" re-formats the stored result; the text must not drift
    let mut calc = new_calc();
    press(&mut calc, "1/3=");
    let first = calc.display_text().to_string();
    press(&mut calc, "+0=");
    assert_eq!(calc.display_text(), first);
}

// --- Custom configuration ---

#[test]
fn honors_a_narrower_display_width() {
    let config: Config = serde_json::from_str(r#"{"display":{"width":4}}"#).unwrap();
    let mut calc = Calculator::new(&config);
    press(&mut calc, "123456");
    assert_eq!(calc.display_text(), "1234");
}
