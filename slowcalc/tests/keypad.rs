// Full button sequences through the session, the way the window drives it.

use std::collections::HashSet;

use slowcalc::{Button, CalcError, Calculator, Notice, Operator};

fn press_all(calc: &mut Calculator, labels: &[&str]) -> Vec<Notice> {
    labels.iter().filter_map(|l| calc.press_label(l)).collect()
}

#[test]
fn seven_plus_three() {
    let mut calc = Calculator::new();
    assert!(press_all(&mut calc, &["7", "+", "3", "="]).is_empty());
    assert_eq!(calc.display(), "10.0");
}

#[test]
fn five_over_zero() {
    let mut calc = Calculator::new();
    let notices = press_all(&mut calc, &["5", "/", "0", "="]);
    assert_eq!(calc.display(), "0");
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].error, CalcError::DivisionByZero);
    assert!(notices[0].dialog);
    assert!(calc.evaluator().stack().is_empty());
    assert!(calc.evaluator().is_idle());
}

#[test]
fn multi_digit_operands() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["1", "2", "*", "1", "2", "="]);
    assert_eq!(calc.display(), "144.0");

    press_all(&mut calc, &["C", "1", "0", "-", "2", "5", "="]);
    assert_eq!(calc.display(), "-15.0");

    press_all(&mut calc, &["C", "1", "/", "4", "="]);
    assert_eq!(calc.display(), "0.25");
}

#[test]
fn result_feeds_next_operator() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["2", "+", "3", "="]);
    assert_eq!(calc.display(), "5.0");
    // The shown result is committed again by the next operator
    press_all(&mut calc, &["*", "4", "="]);
    assert_eq!(calc.display(), "20.0");
}

#[test]
fn equals_twice_underfills() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["2", "+", "3", "="]);
    let notices = press_all(&mut calc, &["="]);
    // "5.0" is pushed next to the stored 5, so this adds them
    assert!(notices.is_empty());
    assert_eq!(calc.display(), "10.0");

    let notices = press_all(&mut calc, &["C", "="]);
    assert_eq!(notices[0].error, CalcError::EmptyStack);
    assert_eq!(notices[0].message, "Can't calculate");
}

#[test]
fn session_recovers_after_errors() {
    let mut calc = Calculator::new();
    press_all(&mut calc, &["9", "/", "0", "="]);
    press_all(&mut calc, &["+", "+"]);
    press_all(&mut calc, &["C", "6", "-", "8", "="]);
    assert_eq!(calc.display(), "-2.0");
}

#[test]
fn equals_right_after_operator() {
    let mut calc = Calculator::new();
    let notices = press_all(&mut calc, &["4", "+", "="]);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].error, CalcError::EmptyStack);
    assert!(notices[0].dialog);
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.evaluator().depth(), 0);
    assert_eq!(calc.evaluator().operator(), None);
}

#[test]
fn keypad_covers_every_button() {
    let keys: Vec<Button> = Button::KEYPAD.iter().flatten().copied().collect();
    let seen: HashSet<Button> = keys.iter().copied().collect();
    assert_eq!(keys.len(), 16);
    assert_eq!(seen.len(), 16);
    for d in 0..=9 {
        assert!(seen.contains(&Button::Digit(d)));
    }
    for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
        assert!(seen.contains(&Button::Operator(op)));
    }
    assert!(seen.contains(&Button::Equals));
    assert!(seen.contains(&Button::Clear));
}
