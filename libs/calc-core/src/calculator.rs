//! Calculator facade
//!
//! Composes the parser and the operation registry: parse, look up, execute.
//! Errors are returned untouched so adapters can map each kind to their own
//! presentation.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::numfmt::format_f64;
use crate::operations::{self, Operator};
use crate::parser::{ExpressionParser, ParsedExpression};

/// Outcome of a successful evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
    pub result: f64,
}

impl Calculation {
    /// Echo of the evaluated expression, e.g. `10.0 + 5.0`
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_f64(self.left),
            self.operator,
            format_f64(self.right)
        )
    }

    /// Expression plus result, e.g. `10.0 + 5.0 = 15.0`
    pub fn formatted(&self) -> String {
        format!("{} = {}", self.expression(), format_f64(self.result))
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Calculator facade
///
/// Immutable after construction; share it behind an `Arc` between
/// concurrent callers.
///
/// # Example
/// ```
/// use calc_core::Calculator;
///
/// let calculator = Calculator::new().unwrap();
/// assert_eq!(calculator.calculate(2.0, "^", 10.0).unwrap(), 1024.0);
///
/// let calc = calculator.evaluate("10+5").unwrap();
/// assert_eq!(calc.formatted(), "10.0 + 5.0 = 15.0");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    parser: ExpressionParser,
}

impl Calculator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: ExpressionParser::new()?,
        })
    }

    /// Apply the operator registered under `operator` to `a` and `b`
    pub fn calculate(&self, a: f64, operator: &str, b: f64) -> Result<f64> {
        let operation = operations::lookup(operator)?;
        operation.execute(a, b)
    }

    /// Registered operator symbols in display order
    pub fn available_operations(&self) -> [&'static str; 5] {
        operations::symbols()
    }

    pub fn parse(&self, expression: &str) -> Result<ParsedExpression> {
        self.parser.parse(expression)
    }

    /// Execute an already parsed expression
    ///
    /// Callers that report parse and operation failures differently parse
    /// first and call this second.
    pub fn compute(&self, parsed: ParsedExpression) -> Result<Calculation> {
        let result = self.calculate(parsed.left, parsed.operator.symbol(), parsed.right)?;

        debug!(
            left = parsed.left,
            operator = parsed.operator.symbol(),
            right = parsed.right,
            result = result,
            "evaluated"
        );

        Ok(Calculation {
            left: parsed.left,
            operator: parsed.operator,
            right: parsed.right,
            result,
        })
    }

    /// Parse and calculate in one step
    pub fn evaluate(&self, expression: &str) -> Result<Calculation> {
        self.compute(self.parse(expression)?)
    }
}
