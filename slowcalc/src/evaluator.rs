//! Operand stack and pending operator.
//!
//! Operands are pushed as number entries are finalized; `evaluate` pops the
//! top two, applies the pending operator and pushes the result back so it can
//! feed a chained computation.

use log::{error, info};

use crate::error::{CalcError, Result};
use crate::input::Operator;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Evaluator {
    stack: Vec<f64>,
    operator: Option<Operator>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse display text and push it. The stack is untouched on failure.
    pub fn push_operand(&mut self, text: &str) -> Result<f64> {
        let trimmed = text.trim();
        let value = trimmed.parse::<f64>().map_err(|e| {
            error!("{trimmed:?}: {e}");
            CalcError::Parse(text.to_string())
        })?;
        self.push_value(value);
        Ok(value)
    }

    pub fn push_value(&mut self, value: f64) {
        self.stack.push(value);
        info!("{value:?} push to stack");
    }

    pub fn set_operator(&mut self, op: Operator) {
        self.operator = Some(op);
        info!("operator set to {op}");
    }

    pub fn evaluate(&mut self) -> Result<f64> {
        info!("--start evaluate--");
        if self.stack.len() < 2 {
            return Err(CalcError::EmptyStack);
        }
        let op = self.operator.ok_or(CalcError::MissingOperator)?;

        let right = self.stack.pop().ok_or(CalcError::EmptyStack)?;
        let left = self.stack.pop().ok_or(CalcError::EmptyStack)?;
        info!("{left:?} {op} {right:?}");

        let result = op.apply(left, right)?;
        info!("result: {result:?}");
        self.push_value(result);
        Ok(result)
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.operator = None;
    }

    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn top(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn is_idle(&self) -> bool {
        self.operator.is_none()
    }
}
