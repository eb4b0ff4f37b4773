//! slowcalc — stack calculator core for the Slow Computer
//!
//! The window lives in the `slowcalc` binary; everything here runs without it.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod session;

pub use error::CalcError;
pub use evaluator::Evaluator;
pub use input::{Button, Operator};
pub use session::{Calculator, Notice};
