//! calc-core - Calculator core library
//!
//! Evaluates single binary expressions of the form `<number> <operator> <number>`.
//!
//! # Features
//!
//! - **Operation registry**: closed table of `+ - * / ^` over `f64`
//! - **Expression parser**: accepts input with or without spaces, negative operands
//! - **Calculator facade**: parse, look up, execute, typed errors
//!
//! # Example
//!
//! ```rust
//! use calc_core::{CalcError, Calculator};
//!
//! let calculator = Calculator::new().unwrap();
//!
//! let calc = calculator.evaluate(" 10 + 5 ").unwrap();
//! assert_eq!(calc.result, 15.0);
//! assert_eq!(calc.formatted(), "10.0 + 5.0 = 15.0");
//!
//! assert_eq!(calculator.evaluate("10/0"), Err(CalcError::DivisionByZero));
//! ```
//!
//! # Operators
//!
//! | Symbol | Operation | Notes |
//! |--------|-----------|-------|
//! | `+` | addition | |
//! | `-` | subtraction | also a sign when glued to a number |
//! | `*` | multiplication | |
//! | `/` | division | fails on a zero divisor |
//! | `^` | power | NaN results are returned, not rejected |

pub mod calculator;
pub mod error;
pub mod numfmt;
pub mod operations;
pub mod parser;

// Re-exports for convenience
pub use calculator::{Calculation, Calculator};
pub use error::{CalcError, Result};
pub use numfmt::format_f64;
pub use operations::{lookup, Operation, Operator};
pub use parser::{ExpressionParser, ParseFailure, ParseOutcome, ParsedExpression};
