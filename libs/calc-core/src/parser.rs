//! Expression parser
//!
//! Turns free-form input such as `"10+5"`, `"10 + 5"` or `"-2.5 ^ -1"` into a
//! `(left, operator, right)` triple. Two phases, first match wins:
//!
//! 1. **Spaced**: the trimmed input splits on whitespace into exactly three
//!    tokens, both outer tokens parse as `f64` (digit groups may be separated
//!    by `_`, as in `1_000`) and the middle token is a registered operator
//!    symbol.
//! 2. **Contiguous**: for each operator in priority order (`+ - * / ^`), the
//!    whole input must match `number OP number`, where a number is an optional
//!    minus sign, digits, and an optional decimal point with trailing digits.
//!
//! The priority order decides ambiguous input: `"5-3"` is a subtraction and
//! `"-5-3"` is `-5 - 3`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{CalcError, Result};
use crate::operations::Operator;

/// Number shape accepted by the contiguous phase
const NUMBER_PATTERN: &str = r"(-?[0-9]+\.?[0-9]*)";

/// A validated `(left, operator, right)` triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedExpression {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
}

impl ParsedExpression {
    pub fn new(left: f64, operator: Operator, right: f64) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }
}

/// Why an input could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Nothing left after trimming
    Empty,
    /// Neither phase matched
    NoMatch,
}

/// Tagged outcome of a parse attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseOutcome {
    /// Matched by the whitespace-delimited phase
    Spaced(ParsedExpression),
    /// Matched by the contiguous phase
    Contiguous(ParsedExpression),
    Failed(ParseFailure),
}

impl ParseOutcome {
    pub fn into_result(self) -> Result<ParsedExpression> {
        match self {
            ParseOutcome::Spaced(expr) | ParseOutcome::Contiguous(expr) => Ok(expr),
            ParseOutcome::Failed(_) => Err(CalcError::MalformedExpression),
        }
    }
}

/// Two-phase expression parser
///
/// Holds one compiled pattern per operator, so build it once and share it.
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    patterns: Vec<(Operator, Regex)>,
}

impl ExpressionParser {
    pub fn new() -> Result<Self> {
        let patterns = Operator::ALL
            .into_iter()
            .map(|op| {
                let pattern = format!(
                    r"^{NUMBER_PATTERN}\s*{}\s*{NUMBER_PATTERN}$",
                    regex::escape(op.symbol())
                );
                Regex::new(&pattern)
                    .map(|re| (op, re))
                    .map_err(|e| CalcError::pattern(format!("operator '{}': {}", op, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Parse input into a triple, failing with `MalformedExpression`
    pub fn parse(&self, input: &str) -> Result<ParsedExpression> {
        self.classify(input).into_result()
    }

    /// Run both phases and report which one matched
    pub fn classify(&self, input: &str) -> ParseOutcome {
        let expression = input.trim();
        if expression.is_empty() {
            return ParseOutcome::Failed(ParseFailure::Empty);
        }

        if let Some(parsed) = parse_spaced(expression) {
            trace!(input = expression, "matched spaced form");
            return ParseOutcome::Spaced(parsed);
        }

        if let Some(parsed) = self.parse_contiguous(expression) {
            trace!(input = expression, "matched contiguous form");
            return ParseOutcome::Contiguous(parsed);
        }

        ParseOutcome::Failed(ParseFailure::NoMatch)
    }

    fn parse_contiguous(&self, expression: &str) -> Option<ParsedExpression> {
        self.patterns.iter().find_map(|(op, re)| {
            let captures = re.captures(expression)?;
            let left = captures.get(1)?.as_str().parse().ok()?;
            let right = captures.get(2)?.as_str().parse().ok()?;
            Some(ParsedExpression::new(left, *op, right))
        })
    }
}

fn parse_spaced(expression: &str) -> Option<ParsedExpression> {
    let mut tokens = expression.split_whitespace();
    let (left, symbol, right) = (tokens.next()?, tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }

    let left = parse_number(left)?;
    let right = parse_number(right)?;
    let operator = Operator::from_symbol(symbol)?;
    Some(ParsedExpression::new(left, operator, right))
}

/// Float token of the spaced phase; `_` is allowed as a separator between digits
fn parse_number(token: &str) -> Option<f64> {
    if !token.contains('_') {
        return token.parse().ok();
    }

    let bytes = token.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }

    token.replace('_', "").parse().ok()
}
