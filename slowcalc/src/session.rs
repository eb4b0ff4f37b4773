//! One calculator session: evaluator plus display text.
//!
//! `press` is the only entry point the window calls. Every error stops here
//! and comes back as a [`Notice`]; the evaluator is reset after any failure
//! so the session stays usable.

use log::{error, info, warn};

use crate::error::CalcError;
use crate::evaluator::Evaluator;
use crate::input::Button;

pub const DISPLAY_DEFAULT: &str = "0";
pub const DISPLAY_ERROR: &str = "Error!";

/// Longest number the user can type.
pub const DEFAULT_MAX_ENTRY_LEN: usize = 15;

/// User-visible result of a failed press.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub error: CalcError,
    pub message: String,
    /// Whether the window should raise an error dialog.
    pub dialog: bool,
}

impl From<CalcError> for Notice {
    fn from(error: CalcError) -> Self {
        Self {
            message: error.user_message().to_string(),
            dialog: error.wants_dialog(),
            error,
        }
    }
}

pub struct Calculator {
    evaluator: Evaluator,
    display: String,
    awaiting_operand: bool,
    max_entry_len: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_max_entry_len(DEFAULT_MAX_ENTRY_LEN)
    }

    pub fn with_max_entry_len(max_entry_len: usize) -> Self {
        Self {
            evaluator: Evaluator::new(),
            display: DISPLAY_DEFAULT.to_string(),
            awaiting_operand: true,
            max_entry_len: max_entry_len.max(1),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Decode a button identifier and press it.
    pub fn press_label(&mut self, label: &str) -> Option<Notice> {
        match label.parse::<Button>() {
            Ok(button) => self.press(button),
            Err(e) => {
                error!("{e}");
                Some(e.into())
            }
        }
    }

    pub fn press(&mut self, button: Button) -> Option<Notice> {
        match button {
            Button::Digit(d) => {
                self.append_digit(d);
                None
            }
            Button::Operator(op) => {
                let notice = self.commit_entry();
                self.evaluator.set_operator(op);
                self.display.clear();
                notice
            }
            Button::Equals => {
                let notice = self.commit_entry();
                match self.evaluator.evaluate() {
                    Ok(result) => {
                        self.display = format_number(result);
                        notice
                    }
                    Err(e) => {
                        error!("{e}");
                        self.reset();
                        Some(e.into())
                    }
                }
            }
            Button::Clear => {
                self.reset();
                info!("cleared");
                None
            }
        }
    }

    fn append_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            warn!("ignoring digit {digit}");
            return;
        };
        if self.awaiting_operand || self.display == DISPLAY_DEFAULT {
            self.display = c.to_string();
            self.awaiting_operand = false;
        } else if self.display.len() < self.max_entry_len {
            self.display.push(c);
        }
    }

    /// Push the display onto the stack. Text that doesn't parse marks the
    /// display and drops whatever was pending; the press itself carries on.
    fn commit_entry(&mut self) -> Option<Notice> {
        self.awaiting_operand = true;
        match self.evaluator.push_operand(&self.display) {
            Ok(_) => None,
            Err(e) => {
                self.evaluator.clear();
                self.display = DISPLAY_ERROR.to_string();
                Some(e.into())
            }
        }
    }

    fn reset(&mut self) {
        self.evaluator.clear();
        self.display = DISPLAY_DEFAULT.to_string();
        self.awaiting_operand = true;
    }
}

/// Plain float-to-text conversion, always with a fractional part ("10.0").
pub fn format_number(n: f64) -> String {
    format!("{n:?}")
}
