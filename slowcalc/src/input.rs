//! Button identifiers, decoded once where they enter the calculator.

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(c: char) -> Result<Self, CalcError> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `left op right`. A zero divisor is rejected rather than producing inf/NaN.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One key on the calculator.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Button {
    Digit(u8),
    Operator(Operator),
    Equals,
    Clear,
}

impl Button {
    /// On-screen layout, row by row.
    pub const KEYPAD: [[Button; 4]; 4] = [
        [
            Button::Digit(7),
            Button::Digit(8),
            Button::Digit(9),
            Button::Operator(Operator::Divide),
        ],
        [
            Button::Digit(4),
            Button::Digit(5),
            Button::Digit(6),
            Button::Operator(Operator::Multiply),
        ],
        [
            Button::Digit(1),
            Button::Digit(2),
            Button::Digit(3),
            Button::Operator(Operator::Subtract),
        ],
        [
            Button::Clear,
            Button::Digit(0),
            Button::Equals,
            Button::Operator(Operator::Add),
        ],
    ];

    pub fn label(self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Operator(op) => op.symbol().to_string(),
            Button::Equals => "=".to_string(),
            Button::Clear => "C".to_string(),
        }
    }
}

impl FromStr for Button {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Button::Equals),
            "C" => Ok(Button::Clear),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => match c.to_digit(10) {
                        Some(d) => Ok(Button::Digit(d as u8)),
                        None => Operator::from_symbol(c).map(Button::Operator),
                    },
                    _ => Err(CalcError::UnknownOperator(s.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_buttons() {
        assert_eq!("7".parse::<Button>(), Ok(Button::Digit(7)));
        assert_eq!("0".parse::<Button>(), Ok(Button::Digit(0)));
        assert_eq!("*".parse::<Button>(), Ok(Button::Operator(Operator::Multiply)));
        assert_eq!("=".parse::<Button>(), Ok(Button::Equals));
        assert_eq!("C".parse::<Button>(), Ok(Button::Clear));
    }

    #[test]
    fn test_decode_unknown() {
        assert_eq!(
            "%".parse::<Button>(),
            Err(CalcError::UnknownOperator("%".into()))
        );
        assert!("12".parse::<Button>().is_err());
        assert!("".parse::<Button>().is_err());
        assert!("c".parse::<Button>().is_err());
        assert!("^".parse::<Operator>().is_err());
    }

    #[test]
    fn test_keypad_labels_decode_back() {
        for row in Button::KEYPAD {
            for button in row {
                assert_eq!(button.label().parse::<Button>(), Ok(button));
            }
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), Ok(10.0));
        assert_eq!(Operator::Subtract.apply(7.0, 3.0), Ok(4.0));
        assert_eq!(Operator::Multiply.apply(7.0, 3.0), Ok(21.0));
        assert_eq!(Operator::Divide.apply(6.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Divide.apply(6.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(6.0, -0.0), Err(CalcError::DivisionByZero));
    }
}
